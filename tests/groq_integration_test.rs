//! Integration tests for the Groq client
//!
//! These tests require a valid API key and will make real API calls.
//! To run them:
//! 1. Export `GROQ_API_KEY` (or put it in a `.env` file)
//! 2. Run: `cargo test --test groq_integration_test -- --ignored`

use std::env;

use studybot::llm::{
    ChatMessage, CompletionRequest, FinishReason, GenerationConfig, GroqClient, GroqModel,
    InferenceClient, LlmError,
};

/// Helper to create a test client
fn create_test_client() -> GroqClient {
    dotenvy::dotenv().ok();

    let api_key = env::var("GROQ_API_KEY").expect("GROQ_API_KEY required");

    GroqClient::new(api_key, GroqModel::GptOss20b).expect("Failed to create Groq client")
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_groq_simple_completion() {
    let client = create_test_client();

    let request = CompletionRequest {
        messages: vec![ChatMessage::user(
            "What is 2+2? Answer with just the number.",
        )],
        config: GenerationConfig::new(100),
    };

    let completion = client.complete(request).await.expect("completion failed");

    println!("Response: {}", completion.text);
    println!("Usage: {:?}", completion.usage);

    assert!(!completion.text.is_empty());
    assert!(completion.text.contains('4'));
    assert!(completion.usage.expect("usage missing").total_tokens > 0);
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_groq_with_system_prompt() {
    let client = create_test_client();

    let request = CompletionRequest {
        messages: vec![
            ChatMessage::system("You are a helpful study assistant."),
            ChatMessage::user("Briefly, what is photosynthesis?"),
        ],
        config: GenerationConfig::new(300),
    };

    let completion = client.complete(request).await.expect("completion failed");

    assert!(!completion.text.is_empty());
    assert_eq!(completion.finish_reason, FinishReason::Stop);
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_groq_multi_turn_replay() {
    let client = create_test_client();

    let request = CompletionRequest {
        messages: vec![
            ChatMessage::system("You are a helpful study assistant."),
            ChatMessage::user("My name is Ada."),
            ChatMessage::assistant("Nice to meet you, Ada!"),
            ChatMessage::user("What is my name?"),
        ],
        config: GenerationConfig::new(100),
    };

    let completion = client.complete(request).await.expect("completion failed");

    // The replayed history is the model's only memory
    assert!(completion.text.contains("Ada"));
}

#[tokio::test]
#[ignore] // Run with --ignored flag
async fn test_groq_invalid_api_key() {
    let client = GroqClient::new("gsk_invalid_key".to_string(), GroqModel::GptOss20b)
        .expect("Failed to create Groq client");

    let request = CompletionRequest {
        messages: vec![ChatMessage::user("Hello")],
        config: GenerationConfig::new(50),
    };

    let err = client.complete(request).await.unwrap_err();
    assert!(matches!(err, LlmError::AuthenticationError(_)));
}
