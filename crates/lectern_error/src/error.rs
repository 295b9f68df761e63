//! Crate-level error wrapper.

use crate::{ConfigError, InputError, ProviderError, ServerError};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum LecternErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Notes could not be read
    Input(InputError),
    /// Completion provider error
    Provider(ProviderError),
    /// Web server error
    Server(ServerError),
}

impl std::fmt::Display for LecternErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LecternErrorKind::Config(e) => write!(f, "{}", e),
            LecternErrorKind::Input(e) => write!(f, "{}", e),
            LecternErrorKind::Provider(e) => write!(f, "{}", e),
            LecternErrorKind::Server(e) => write!(f, "{}", e),
        }
    }
}

/// Lectern error with kind discrimination.
///
/// # Examples
///
/// ```
/// use lectern_error::{ConfigError, LecternError, LecternErrorKind};
///
/// let err: LecternError = ConfigError::new("bad bind address").into();
/// assert!(matches!(err.kind(), LecternErrorKind::Config(_)));
/// ```
#[derive(Debug)]
pub struct LecternError(Box<LecternErrorKind>);

impl LecternError {
    /// Create a new error from a kind.
    pub fn new(kind: LecternErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LecternErrorKind {
        &self.0
    }
}

impl std::fmt::Display for LecternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lectern Error: {}", self.0)
    }
}

impl std::error::Error for LecternError {}

impl<T> From<T> for LecternError
where
    T: Into<LecternErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Lectern operations.
pub type LecternResult<T> = std::result::Result<T, LecternError>;
