//! Generation parameter error types.

/// A slider value that could not be coerced to the number the API expects.
///
/// # Examples
///
/// ```
/// use lectern_error::ParameterError;
///
/// let err = ParameterError::new("max_tokens", "lots");
/// assert_eq!(err.name, "max_tokens");
/// assert_eq!(err.reason(), "invalid max_tokens value 'lots'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterError {
    /// Parameter name
    pub name: &'static str,
    /// The rejected value as received
    pub value: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ParameterError {
    /// Create a new ParameterError at the caller's location.
    #[track_caller]
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            name,
            value: value.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// User-facing description without source location.
    pub fn reason(&self) -> String {
        format!("invalid {} value '{}'", self.name, self.value)
    }
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parameter Error: {} at line {} in {}",
            self.reason(),
            self.line,
            self.file
        )
    }
}

impl std::error::Error for ParameterError {}
