//! Client for OpenAI-compatible chat-completion APIs.
//!
//! The HuggingFace router accepts this format, as do most hosted inference
//! services, so the wire types live here rather than under a single provider.

mod client;
mod conversions;
mod dto;

pub use client::OpenAICompatibleClient;
pub use dto::{ChatChoice, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage, ResponseMessage};
