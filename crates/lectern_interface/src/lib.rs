//! Trait definitions for the Lectern notes summarizer.
//!
//! The remote inference service sits behind [`ChatCompletion`] so the request
//! assembler can be driven by the HuggingFace client in production and by a
//! stub in tests.

use async_trait::async_trait;
use lectern_core::ChatMessage;
use lectern_error::ProviderError;
use std::sync::Arc;

/// A hosted chat-completion endpoint.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Sends one chat-completion request and returns the first choice's content.
    ///
    /// Implementations make exactly one attempt; retries are the caller's call.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures, non-success statuses and
    /// responses without usable content.
    async fn chat_complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ProviderError>;
}

#[async_trait]
impl<T> ChatCompletion for Arc<T>
where
    T: ChatCompletion + ?Sized,
{
    async fn chat_complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        (**self).chat_complete(messages, max_tokens, temperature).await
    }
}
