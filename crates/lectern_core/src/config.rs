//! Process configuration, resolved once at startup.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use lectern_error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, instrument};

/// Environment variable carrying the bearer token.
pub const HF_TOKEN_VAR: &str = "HF_TOKEN";
/// Environment variable naming the hosted model.
pub const API_MODEL_VAR: &str = "API_MODEL";

/// Model used when `API_MODEL` is unset.
pub const DEFAULT_MODEL_ID: &str = "zai-org/GLM-4.7-Flash";
/// HuggingFace router chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://router.huggingface.co/v1/chat/completions";
/// Address the web form listens on.
pub const DEFAULT_BIND: &str = "127.0.0.1:7860";

const DEFAULT_CONFIG_NAME: &str = "lectern";
const ENV_PREFIX: &str = "LECTERN";

/// Immutable process configuration.
///
/// Layers, lowest precedence first: built-in defaults, `lectern.toml` (or an
/// explicit file), `LECTERN_*` variables, then `HF_TOKEN` and `API_MODEL`.
#[derive(Clone, PartialEq, Eq, Getters, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AppConfig {
    /// Bearer token for the inference endpoint
    #[builder(default)]
    #[serde(default)]
    hf_token: Option<String>,
    /// Hosted model identifier
    #[builder(default = "DEFAULT_MODEL_ID.to_string()")]
    model_id: String,
    /// Chat-completions URL
    #[builder(default = "DEFAULT_ENDPOINT.to_string()")]
    endpoint: String,
    /// Web server bind address
    #[builder(default = "DEFAULT_BIND.to_string()")]
    bind: String,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// With `path` set, that file must exist; otherwise `lectern.toml` in the
    /// working directory is read when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be parsed or a value has the wrong type.
    #[instrument(name = "config_load")]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Self::from_layers(
            file,
            std::env::var(HF_TOKEN_VAR).ok(),
            std::env::var(API_MODEL_VAR).ok(),
        )
    }

    /// Builds configuration from TOML text, with explicit overrides standing in
    /// for `HF_TOKEN` and `API_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a value has the wrong type.
    pub fn from_toml_str(
        toml: &str,
        hf_token: Option<String>,
        model_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::from_layers(File::from_str(toml, FileFormat::Toml), hf_token, model_id)
    }

    fn from_layers<S>(
        file: S,
        hf_token: Option<String>,
        model_id: Option<String>,
    ) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let hf_token = hf_token.filter(|token| !token.trim().is_empty());
        let model_id = model_id.filter(|model| !model.trim().is_empty());

        let settings = Config::builder()
            .set_default("model_id", DEFAULT_MODEL_ID)
            .and_then(|b| b.set_default("endpoint", DEFAULT_ENDPOINT))
            .and_then(|b| b.set_default("bind", DEFAULT_BIND))
            .map(|b| b.add_source(file))
            .map(|b| b.add_source(Environment::with_prefix(ENV_PREFIX)))
            .and_then(|b| b.set_override_option("hf_token", hf_token))
            .and_then(|b| b.set_override_option("model_id", model_id))
            .and_then(|b| b.build())
            .map_err(|e| ConfigError::new(format!("Failed to assemble configuration: {}", e)))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;

        debug!(
            model = %config.model_id,
            endpoint = %config.endpoint,
            bind = %config.bind,
            token_present = config.hf_token.is_some(),
            "Configuration resolved"
        );

        Ok(config)
    }

    /// Returns a builder for constructing an AppConfig.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hf_token: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("hf_token", &self.hf_token.as_ref().map(|_| "<redacted>"))
            .field("model_id", &self.model_id)
            .field("endpoint", &self.endpoint)
            .field("bind", &self.bind)
            .finish()
    }
}
