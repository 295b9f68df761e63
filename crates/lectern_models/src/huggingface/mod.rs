//! HuggingFace Inference API integration.
//!
//! The inference router exposes an OpenAI-compatible chat-completions route,
//! so this is a thin configuration layer over [`OpenAICompatibleClient`].

use crate::OpenAICompatibleClient;
use async_trait::async_trait;
use lectern_core::{AppConfig, ChatMessage};
use lectern_error::ProviderError;
use lectern_interface::ChatCompletion;
use tracing::instrument;

/// Provider name used in logs.
pub const HUGGINGFACE_PROVIDER: &str = "huggingface";

/// Chat-completion client for a model hosted on HuggingFace.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    inner: OpenAICompatibleClient,
}

impl HuggingFaceClient {
    /// Creates a client for `model` at `endpoint`.
    pub fn new(api_key: Option<String>, model: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            inner: OpenAICompatibleClient::new(
                api_key,
                model.into(),
                endpoint.into(),
                HUGGINGFACE_PROVIDER,
            ),
        }
    }

    /// Creates a client from resolved process configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.hf_token().clone(),
            config.model_id().clone(),
            config.endpoint().clone(),
        )
    }
}

#[async_trait]
impl ChatCompletion for HuggingFaceClient {
    #[instrument(skip_all, fields(provider = HUGGINGFACE_PROVIDER))]
    async fn chat_complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        self.inner
            .chat_complete(messages, max_tokens, temperature)
            .await
    }
}
