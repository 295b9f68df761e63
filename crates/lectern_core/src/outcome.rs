//! Result of one summarization attempt.

/// Guidance shown when the notes field is empty.
pub const MISSING_NOTES_MESSAGE: &str = "Please paste your notes.";

/// Run-info marker shown after a failed call.
pub const API_ERROR_STATUS: &str = "API error";

/// What happened to a summary request.
///
/// Every variant maps onto the two form outputs: the rendered text and the
/// single-line run-info string.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    /// Notes were empty after trimming; nothing was sent.
    MissingNotes,
    /// The model answered.
    Completed {
        /// Trimmed completion text
        text: String,
        /// Wall-clock seconds spent in the call
        elapsed_seconds: f64,
        /// Model that produced the text
        model_id: String,
    },
    /// Coercion or the remote call failed.
    Failed {
        /// Description of the failure
        detail: String,
    },
}

impl SummaryOutcome {
    /// Text for the summary area.
    pub fn display_text(&self) -> String {
        match self {
            SummaryOutcome::MissingNotes => MISSING_NOTES_MESSAGE.to_string(),
            SummaryOutcome::Completed { text, .. } => text.clone(),
            SummaryOutcome::Failed { detail } => format!("Error calling API: {}", detail),
        }
    }

    /// Text for the run-info field.
    pub fn status_text(&self) -> String {
        match self {
            SummaryOutcome::MissingNotes => String::new(),
            SummaryOutcome::Completed {
                elapsed_seconds,
                model_id,
                ..
            } => format!(
                "Mode: API | Model: {} | Time: {:.2}s",
                model_id, elapsed_seconds
            ),
            SummaryOutcome::Failed { .. } => API_ERROR_STATUS.to_string(),
        }
    }

    /// Both form outputs, in display order.
    pub fn into_display(self) -> (String, String) {
        (self.display_text(), self.status_text())
    }

    /// Returns true when the model produced text.
    pub fn is_completed(&self) -> bool {
        matches!(self, SummaryOutcome::Completed { .. })
    }
}
