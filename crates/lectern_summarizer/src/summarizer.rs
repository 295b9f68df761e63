//! The request assembler.

use crate::build_messages;
use lectern_core::{AppConfig, SliderValue, SummaryOutcome, SummaryRequest, SummaryStyle};
use lectern_interface::ChatCompletion;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Builds prompts and calls a [`ChatCompletion`] backend.
///
/// Holds no per-request state; one instance serves any number of concurrent
/// requests.
#[derive(Debug, Clone)]
pub struct Summarizer<C> {
    client: C,
    model_id: String,
}

impl<C> Summarizer<C>
where
    C: ChatCompletion,
{
    /// Creates a summarizer reporting the model configured in `config`.
    pub fn new(client: C, config: &AppConfig) -> Self {
        Self::with_model_id(client, config.model_id().clone())
    }

    /// Creates a summarizer reporting `model_id` in run info.
    pub fn with_model_id(client: C, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    /// Returns the model identifier shown in run info.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Runs one summary request.
    ///
    /// Blank notes short-circuit without touching the network. Otherwise
    /// exactly one completion call is made and every failure, including a
    /// slider value that cannot be coerced, comes back as
    /// [`SummaryOutcome::Failed`].
    #[instrument(
        skip(self, request),
        fields(style = %request.style(), model = %self.model_id)
    )]
    pub async fn summarize(&self, request: &SummaryRequest) -> SummaryOutcome {
        let notes = request.notes().trim();
        if notes.is_empty() {
            info!("Rejected request with empty notes");
            return SummaryOutcome::MissingNotes;
        }

        let messages = build_messages(*request.style(), notes);

        let max_tokens = match request.max_tokens().to_max_tokens() {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Could not coerce max_tokens");
                return SummaryOutcome::Failed { detail: e.reason() };
            }
        };
        let temperature = match request.temperature().to_temperature() {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Could not coerce temperature");
                return SummaryOutcome::Failed { detail: e.reason() };
            }
        };

        debug!(
            notes_len = notes.len(),
            max_tokens, temperature, "Requesting completion"
        );

        let started = Instant::now();
        match self
            .client
            .chat_complete(&messages, max_tokens, temperature)
            .await
        {
            Ok(content) => {
                let elapsed_seconds = started.elapsed().as_secs_f64();
                info!(elapsed_seconds, "Completion received");
                SummaryOutcome::Completed {
                    text: content.trim().to_string(),
                    elapsed_seconds,
                    model_id: self.model_id.clone(),
                }
            }
            Err(e) => {
                warn!(error = %e, "Completion call failed");
                SummaryOutcome::Failed {
                    detail: e.kind.to_string(),
                }
            }
        }
    }

    /// Form-level entry point returning `(display_text, status_text)`.
    pub async fn summarize_notes(
        &self,
        notes: &str,
        style: SummaryStyle,
        max_tokens: impl Into<SliderValue>,
        temperature: impl Into<SliderValue>,
    ) -> (String, String) {
        let request = SummaryRequest::new(notes, style, max_tokens, temperature);
        self.summarize(&request).await.into_display()
    }
}
