//! Core data types for the Lectern notes summarizer.
//!
//! This crate holds the vocabulary shared by the provider client, the request
//! assembler and the web surface, plus process configuration and tracing setup.

mod config;
mod message;
mod observability;
mod outcome;
mod request;
mod role;
mod slider;
mod style;

pub use config::{
    API_MODEL_VAR, AppConfig, AppConfigBuilder, DEFAULT_BIND, DEFAULT_ENDPOINT, DEFAULT_MODEL_ID,
    HF_TOKEN_VAR,
};
pub use message::ChatMessage;
pub use observability::init_tracing;
pub use outcome::{API_ERROR_STATUS, MISSING_NOTES_MESSAGE, SummaryOutcome};
pub use request::{SummaryRequest, SummaryRequestBuilder};
pub use role::Role;
pub use slider::{MAX_TOKENS, SliderBounds, SliderValue, TEMPERATURE};
pub use style::SummaryStyle;
