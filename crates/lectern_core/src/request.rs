//! Summary request type.

use crate::{MAX_TOKENS, SliderValue, SummaryStyle, TEMPERATURE};
use serde::{Deserialize, Serialize};

/// One summarization request, as collected by a form.
///
/// Missing fields fall back to the form defaults when deserialized.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct SummaryRequest {
    /// Raw pasted notes, untrimmed
    #[serde(default)]
    notes: String,
    /// Summarization style
    #[builder(default)]
    #[serde(default)]
    style: SummaryStyle,
    /// Maximum tokens to generate
    #[builder(default = "default_max_tokens()")]
    #[serde(default = "default_max_tokens")]
    max_tokens: SliderValue,
    /// Sampling temperature
    #[builder(default = "default_temperature()")]
    #[serde(default = "default_temperature")]
    temperature: SliderValue,
}

impl SummaryRequest {
    /// Creates a request with every field given.
    pub fn new(
        notes: impl Into<String>,
        style: SummaryStyle,
        max_tokens: impl Into<SliderValue>,
        temperature: impl Into<SliderValue>,
    ) -> Self {
        Self {
            notes: notes.into(),
            style,
            max_tokens: max_tokens.into(),
            temperature: temperature.into(),
        }
    }

    /// Returns a builder for constructing a SummaryRequest.
    pub fn builder() -> SummaryRequestBuilder {
        SummaryRequestBuilder::default()
    }
}

fn default_max_tokens() -> SliderValue {
    SliderValue::Number(MAX_TOKENS.default)
}

fn default_temperature() -> SliderValue {
    SliderValue::Number(TEMPERATURE.default)
}
