//! Tracing subscriber initialization.

use lectern_error::ConfigError;
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// Honors `RUST_LOG`; falls back to `info` when it is unset or unparsable.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install tracing subscriber: {}", e)))
}
