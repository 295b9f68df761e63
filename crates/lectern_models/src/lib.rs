//! Hosted chat-completion providers for Lectern.
//!
//! [`OpenAICompatibleClient`] speaks the OpenAI chat-completions dialect;
//! [`HuggingFaceClient`] points it at the HuggingFace inference router.

mod huggingface;
mod openai_compat;

pub use huggingface::{HUGGINGFACE_PROVIDER, HuggingFaceClient};
pub use openai_compat::{
    ChatChoice, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage, OpenAICompatibleClient,
    ResponseMessage,
};
