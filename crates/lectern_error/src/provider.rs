//! Completion provider error types.

/// Specific failure conditions of a chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Transport-level failure (DNS, TLS, connection reset)
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// The endpoint answered with a non-success status
    #[display("API returned status {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        message: String,
    },

    /// The response body was not a chat-completion document
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),

    /// The response contained no completion choices
    #[display("Response contained no completion choices")]
    EmptyResponse,

    /// The first choice carried no message content
    #[display("Completion choice has no message content")]
    MissingContent,

    /// Any other failure, reported verbatim
    #[display("{}", _0)]
    Other(String),
}

/// Error returned by a chat-completion provider.
///
/// # Examples
///
/// ```
/// use lectern_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::Other("boom".to_string()));
/// assert_eq!(err.kind.to_string(), "boom");
/// assert!(err.to_string().contains("Provider Error: boom"));
/// ```
#[derive(Debug, Clone)]
pub struct ProviderError {
    /// The specific error condition
    pub kind: ProviderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Provider Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ProviderError {}
