//! Web server error types.

/// Specific error conditions for the web surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// Bind address could not be parsed or bound
    #[display("Failed to bind {}: {}", addr, message)]
    Bind {
        /// Requested address
        addr: String,
        /// Underlying error message
        message: String,
    },
    /// The server loop exited with an error
    #[display("Server failed: {}", _0)]
    Serve(String),
}

/// Error type for the web surface.
#[derive(Debug, Clone)]
pub struct ServerError {
    /// The specific error condition
    pub kind: ServerErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Server Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ServerError {}
