use lectern_core::{AppConfig, ChatMessage};
use lectern_interface::ChatCompletion;
use lectern_models::HuggingFaceClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_huggingface_simple_completion() {
    dotenvy::dotenv().ok();
    let config = AppConfig::load(None).expect("configuration loads");
    assert!(
        config.hf_token().is_some(),
        "HF_TOKEN must be set for API tests"
    );

    let client = HuggingFaceClient::from_config(&config);
    let messages = vec![
        ChatMessage::system("Answer in one word."),
        ChatMessage::user("Say 'test' and nothing else."),
    ];

    let text = client
        .chat_complete(&messages, 64, 0.1)
        .await
        .expect("API call succeeded");

    assert!(!text.trim().is_empty());
    println!("Response: {}", text);
}
