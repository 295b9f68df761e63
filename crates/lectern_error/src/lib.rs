//! Error types for the Lectern notes summarizer.
//!
//! Every error records the source location where it was constructed. The
//! umbrella [`LecternError`] wraps the per-concern errors so binaries can
//! propagate any of them with `?`.

mod config;
mod error;
mod input;
mod parameter;
mod provider;
mod server;

pub use config::ConfigError;
pub use error::{LecternError, LecternErrorKind, LecternResult};
pub use input::InputError;
pub use parameter::ParameterError;
pub use provider::{ProviderError, ProviderErrorKind};
pub use server::{ServerError, ServerErrorKind};
