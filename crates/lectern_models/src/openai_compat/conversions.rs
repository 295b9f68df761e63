//! Conversions between Lectern messages and the OpenAI wire format.

use crate::openai_compat::{ChatRequest, ChatResponse};
use lectern_core::ChatMessage;
use lectern_error::{ProviderError, ProviderErrorKind};

/// Builds a non-streaming chat request for `model`.
pub fn to_chat_request(
    messages: &[ChatMessage],
    model: &str,
    max_tokens: u32,
    temperature: f32,
) -> Result<ChatRequest, ProviderError> {
    ChatRequest::builder()
        .model(model)
        .messages(messages.to_vec())
        .max_tokens(Some(max_tokens))
        .temperature(Some(temperature))
        .build()
        .map_err(|e| {
            ProviderError::new(ProviderErrorKind::Other(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Extracts the first choice's message content.
pub fn from_chat_response(response: &ChatResponse) -> Result<String, ProviderError> {
    let choice = response
        .choices
        .first()
        .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyResponse))?;

    choice
        .message
        .content
        .clone()
        .ok_or_else(|| ProviderError::new(ProviderErrorKind::MissingContent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ChatResponse {
        serde_json::from_str(json).expect("valid response JSON")
    }

    #[test]
    fn request_serializes_messages_and_parameters() {
        let messages = vec![ChatMessage::system("Be brief."), ChatMessage::user("Hi")];
        let request = to_chat_request(&messages, "zai-org/GLM-4.7-Flash", 350, 0.4).unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "zai-org/GLM-4.7-Flash");
        assert_eq!(value["max_tokens"], 350);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "Hi");
        assert!(value.get("stream").is_none());
    }

    #[test]
    fn first_choice_content_is_returned_untrimmed() {
        let response = parse(
            r#"{"choices": [
                {"message": {"role": "assistant", "content": "  first  "}, "finish_reason": "stop"},
                {"message": {"role": "assistant", "content": "second"}}
            ]}"#,
        );
        assert_eq!(from_chat_response(&response).unwrap(), "  first  ");
    }

    #[test]
    fn empty_choices_is_an_error() {
        let err = from_chat_response(&parse(r#"{"choices": []}"#)).unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::EmptyResponse);
    }

    #[test]
    fn null_content_is_an_error() {
        let response = parse(r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#);
        let err = from_chat_response(&response).unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::MissingContent);
    }
}
