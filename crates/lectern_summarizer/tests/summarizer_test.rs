//! Request assembler behavior against a stubbed completion backend.

use async_trait::async_trait;
use lectern_core::{AppConfig, ChatMessage, Role, SummaryOutcome, SummaryRequest, SummaryStyle};
use lectern_error::{ProviderError, ProviderErrorKind};
use lectern_interface::ChatCompletion;
use lectern_summarizer::{SYSTEM_PROMPT, Summarizer};
use std::sync::{Arc, Mutex};

/// One recorded `chat_complete` invocation.
#[derive(Debug, Clone)]
struct RecordedCall {
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

/// Stub backend that records calls and replays a fixed reply.
#[derive(Clone)]
struct StubCompletion {
    reply: Result<String, String>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubCompletion {
    fn answering(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl ChatCompletion for StubCompletion {
    async fn chat_complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ProviderError> {
        self.calls.lock().expect("lock").push(RecordedCall {
            messages: messages.to_vec(),
            max_tokens,
            temperature,
        });
        self.reply
            .clone()
            .map_err(|message| ProviderError::new(ProviderErrorKind::Other(message)))
    }
}

const MODEL: &str = "zai-org/GLM-4.7-Flash";

fn summarizer(stub: &StubCompletion) -> Summarizer<StubCompletion> {
    Summarizer::with_model_id(stub.clone(), MODEL)
}

/// Checks `Mode: API | Model: {MODEL} | Time: {float}s`.
fn assert_run_info(status: &str) {
    let prefix = format!("Mode: API | Model: {} | Time: ", MODEL);
    let seconds = status
        .strip_prefix(&prefix)
        .and_then(|rest| rest.strip_suffix('s'))
        .unwrap_or_else(|| panic!("unexpected status: {}", status));
    let (whole, fraction) = seconds.split_once('.').expect("two decimal places");
    assert!(whole.parse::<u64>().is_ok());
    assert_eq!(fraction.len(), 2);
    assert!(seconds.parse::<f64>().is_ok());
}

#[tokio::test]
async fn test_blank_notes_make_no_call() {
    let stub = StubCompletion::answering("unused");
    let summarizer = summarizer(&stub);

    for notes in ["", "   ", "\n\t  \n"] {
        let output = summarizer
            .summarize_notes(notes, SummaryStyle::Detailed, 350u32, 0.4)
            .await;
        assert_eq!(
            output,
            ("Please paste your notes.".to_string(), String::new())
        );
    }

    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_photosynthesis_example_makes_exactly_one_call() {
    let stub = StubCompletion::answering("- Light becomes chemical energy");
    let summarizer = summarizer(&stub);

    let (text, status) = summarizer
        .summarize_notes(
            "Photosynthesis converts light to energy.",
            SummaryStyle::Short,
            350u32,
            0.4,
        )
        .await;

    assert_eq!(text, "- Light becomes chemical energy");
    assert_run_info(&status);

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.max_tokens, 350);
    assert!((call.temperature - 0.4).abs() < 1e-6);
    assert_eq!(call.messages.len(), 2);
    assert_eq!(*call.messages[0].role(), Role::System);
    assert_eq!(call.messages[0].content(), SYSTEM_PROMPT);
    assert_eq!(*call.messages[1].role(), Role::User);
    assert_eq!(
        call.messages[1].content(),
        "Style: Short (bullet points)\n\nNotes:\nPhotosynthesis converts light to energy."
    );
}

#[tokio::test]
async fn test_notes_are_trimmed_in_user_message() {
    let stub = StubCompletion::answering("ok");
    let summarizer = summarizer(&stub);

    summarizer
        .summarize_notes(
            "\n   Line one\nLine two   \n\n",
            SummaryStyle::ExamFocused,
            512u32,
            1.0,
        )
        .await;

    assert_eq!(
        stub.calls()[0].messages[1].content(),
        "Style: Exam-focused (key ideas + likely questions)\n\nNotes:\nLine one\nLine two"
    );
}

#[tokio::test]
async fn test_completion_text_is_trimmed() {
    let stub = StubCompletion::answering("\n\n  X  \n");
    let (text, _) = summarizer(&stub)
        .summarize_notes("notes", SummaryStyle::Detailed, 350u32, 0.4)
        .await;
    assert_eq!(text, "X");
}

#[tokio::test]
async fn test_provider_error_is_collapsed_into_message() {
    let stub = StubCompletion::failing("boom");
    let output = summarizer(&stub)
        .summarize_notes("notes", SummaryStyle::Detailed, 350u32, 0.4)
        .await;

    assert_eq!(
        output,
        ("Error calling API: boom".to_string(), "API error".to_string())
    );
    assert_eq!(stub.calls().len(), 1);
}

#[tokio::test]
async fn test_string_encoded_sliders_are_coerced() {
    let stub = StubCompletion::answering("ok");
    let request = SummaryRequest::new("notes", SummaryStyle::Short, "128", " 0.7 ");

    let outcome = summarizer(&stub).summarize(&request).await;

    assert!(outcome.is_completed());
    let call = &stub.calls()[0];
    assert_eq!(call.max_tokens, 128);
    assert!((call.temperature - 0.7).abs() < 1e-6);
}

#[tokio::test]
async fn test_fractional_token_count_truncates() {
    let stub = StubCompletion::answering("ok");
    summarizer(&stub)
        .summarize_notes("notes", SummaryStyle::Short, 350.9, 0.4)
        .await;
    assert_eq!(stub.calls()[0].max_tokens, 350);
}

#[tokio::test]
async fn test_uncoercible_slider_fails_without_call() {
    let stub = StubCompletion::answering("unused");
    let request = SummaryRequest::new("notes", SummaryStyle::Short, "many", 0.4);

    let outcome = summarizer(&stub).summarize(&request).await;

    assert_eq!(
        outcome,
        SummaryOutcome::Failed {
            detail: "invalid max_tokens value 'many'".to_string()
        }
    );
    assert_eq!(outcome.status_text(), "API error");
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_model_id_comes_from_config() {
    let stub = StubCompletion::answering("ok");
    let config = AppConfig::builder()
        .model_id("meta-llama/Llama-3.1-8B-Instruct")
        .build()
        .expect("valid config");
    let summarizer = Summarizer::new(stub, &config);

    let (_, status) = summarizer
        .summarize_notes("notes", SummaryStyle::Short, 350u32, 0.4)
        .await;

    assert!(status.starts_with("Mode: API | Model: meta-llama/Llama-3.1-8B-Instruct | Time: "));
}

#[tokio::test]
async fn test_shared_backend_serves_concurrent_requests() {
    let stub = StubCompletion::answering("ok");
    let summarizer = Arc::new(summarizer(&stub));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let summarizer = summarizer.clone();
            tokio::spawn(async move {
                summarizer
                    .summarize_notes(&format!("notes {}", i), SummaryStyle::Short, 350u32, 0.4)
                    .await
            })
        })
        .collect();

    for handle in handles {
        let (text, _) = handle.await.expect("task completes");
        assert_eq!(text, "ok");
    }
    assert_eq!(stub.calls().len(), 4);
}
