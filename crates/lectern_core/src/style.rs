//! Summary style selector.

use serde::{Deserialize, Serialize};

/// Summarization mode chosen by the caller.
///
/// The display string is inserted verbatim into the prompt, so it doubles as
/// the wire value in forms and JSON. Short aliases are accepted when parsing.
///
/// # Examples
///
/// ```
/// use lectern_core::SummaryStyle;
/// use std::str::FromStr;
///
/// assert_eq!(SummaryStyle::Short.to_string(), "Short (bullet points)");
/// assert_eq!(SummaryStyle::from_str("exam-focused").unwrap(), SummaryStyle::ExamFocused);
/// assert_eq!(SummaryStyle::default(), SummaryStyle::Detailed);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum SummaryStyle {
    #[serde(rename = "Short (bullet points)")]
    #[strum(to_string = "Short (bullet points)", serialize = "short")]
    Short,

    #[default]
    #[serde(rename = "Detailed (headings + bullets)")]
    #[strum(to_string = "Detailed (headings + bullets)", serialize = "detailed")]
    Detailed,

    #[serde(rename = "Exam-focused (key ideas + likely questions)")]
    #[strum(
        to_string = "Exam-focused (key ideas + likely questions)",
        serialize = "exam-focused"
    )]
    ExamFocused,
}

impl SummaryStyle {
    /// All styles in selector order.
    pub fn all() -> impl Iterator<Item = SummaryStyle> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}
