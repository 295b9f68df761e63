//! Input error types.

/// Failure to read notes from a file or standard input.
#[derive(Debug, Clone)]
pub struct InputError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Input Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for InputError {}
