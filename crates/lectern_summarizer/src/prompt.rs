//! Fixed prompt template.

use lectern_core::{ChatMessage, SummaryStyle};

/// Standing instruction sent as the system message.
pub const SYSTEM_PROMPT: &str = "You are a Lecture Notes Summarizer for WPI students. \
Summarize clearly using headings and bullet points. \
Extract key terms, definitions, and 5 practice questions at the end.";

/// User message body for `style` and already-trimmed `notes`.
///
/// # Examples
///
/// ```
/// use lectern_core::SummaryStyle;
/// use lectern_summarizer::user_content;
///
/// assert_eq!(
///     user_content(SummaryStyle::Short, "Cells divide."),
///     "Style: Short (bullet points)\n\nNotes:\nCells divide."
/// );
/// ```
pub fn user_content(style: SummaryStyle, notes: &str) -> String {
    format!("Style: {}\n\nNotes:\n{}", style, notes)
}

/// The system instruction followed by the user message.
pub fn build_messages(style: SummaryStyle, notes: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_content(style, notes)),
    ]
}
