//! Generic client for OpenAI-compatible APIs.

use crate::openai_compat::{ChatResponse, conversions};
use async_trait::async_trait;
use lectern_core::ChatMessage;
use lectern_error::{ProviderError, ProviderErrorKind};
use lectern_interface::ChatCompletion;
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Generic client for any OpenAI-compatible chat-completions endpoint.
///
/// Uses reqwest's default client settings; no request timeout is applied.
#[derive(Clone)]
pub struct OpenAICompatibleClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
    provider_name: &'static str,
}

impl OpenAICompatibleClient {
    /// Creates a new OpenAI-compatible client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer token, sent only when present
    /// * `model` - Model identifier placed in every request body
    /// * `endpoint` - Full chat-completions URL
    /// * `provider_name` - Name of the provider (for logging/tracing)
    #[instrument(skip_all, fields(provider = provider_name, model = %model))]
    pub fn new(
        api_key: Option<String>,
        model: String,
        endpoint: String,
        provider_name: &'static str,
    ) -> Self {
        debug!(
            provider = provider_name,
            model = %model,
            url = %endpoint,
            authenticated = api_key.is_some(),
            "Created OpenAI-compatible client"
        );

        Self {
            client: Client::new(),
            api_key,
            model,
            endpoint,
            provider_name,
        }
    }
}

impl std::fmt::Debug for OpenAICompatibleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAICompatibleClient")
            .field("provider_name", &self.provider_name)
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("authenticated", &self.api_key.is_some())
            .finish()
    }
}

#[async_trait]
impl ChatCompletion for OpenAICompatibleClient {
    #[instrument(
        skip(self, messages),
        fields(provider = self.provider_name, model = %self.model, message_count = messages.len())
    )]
    async fn chat_complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        let chat_request =
            conversions::to_chat_request(messages, &self.model, max_tokens, temperature)?;

        debug!(
            provider = self.provider_name,
            max_tokens,
            temperature,
            "Sending request"
        );

        let mut request = self.client.post(&self.endpoint).json(&chat_request);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            error!(provider = self.provider_name, error = ?e, "HTTP request failed");
            ProviderError::new(ProviderErrorKind::Http(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                provider = self.provider_name,
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(ProviderError::new(ProviderErrorKind::Status {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(provider = self.provider_name, error = ?e, "Failed to parse response");
            ProviderError::new(ProviderErrorKind::ResponseParsing(e.to_string()))
        })?;

        debug!(
            provider = self.provider_name,
            choices = chat_response.choices.len(),
            prompt_tokens = ?chat_response.usage.as_ref().and_then(|u| u.prompt_tokens),
            completion_tokens = ?chat_response.usage.as_ref().and_then(|u| u.completion_tokens),
            "Received response"
        );

        conversions::from_chat_response(&chat_response)
    }
}
