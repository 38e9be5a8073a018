//! Groq-specific request and response types
//!
//! These types map directly to the Groq OpenAI-compatible chat completions
//! API schema.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Array of messages in the conversation
    pub messages: Vec<GroqMessage>,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Temperature (0.0-2.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Top-p nucleus sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    /// Stop sequences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    /// Always false; the service consumes complete responses only
    pub stream: bool,
}

/// A single message in the wire conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqMessage {
    /// Role: "system", "user" or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
}

/// Response body for a non-streaming chat completion
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion ID assigned by the API
    pub id: String,
    /// Model that served the request
    #[serde(default)]
    pub model: Option<String>,
    /// Generated choices (the API returns one unless n > 1 is requested)
    pub choices: Vec<Choice>,
    /// Token accounting for the call
    #[serde(default)]
    pub usage: Option<GroqUsage>,
}

/// One generated choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Choice index
    pub index: u32,
    /// The generated message
    pub message: GroqResponseMessage,
    /// Why generation stopped ("stop", "length", ...)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message payload of a choice
#[derive(Debug, Clone, Deserialize)]
pub struct GroqResponseMessage {
    /// Role, always "assistant" for completions
    pub role: String,
    /// Generated text; absent for refusals and tool-only turns
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage reported by the API
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GroqUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Error envelope returned on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct GroqErrorResponse {
    pub error: GroqErrorData,
}

/// Error details within the envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GroqErrorData {
    /// Human-readable description
    pub message: String,
    /// Error class (e.g. "invalid_request_error")
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Machine-readable code (e.g. "model_not_found")
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = ChatCompletionRequest {
            model: "openai/gpt-oss-120b".to_string(),
            messages: vec![GroqMessage {
                role: "user".to_string(),
                content: "Hello".to_string(),
            }],
            max_tokens: 1024,
            temperature: None,
            top_p: None,
            stop: None,
            stream: false,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"openai/gpt-oss-120b\""));
        assert!(json.contains("\"max_tokens\":1024"));
        assert!(json.contains("\"stream\":false"));
        // None fields are omitted from the wire request
        assert!(!json.contains("temperature"));
        assert!(!json.contains("top_p"));
        assert!(!json.contains("stop"));
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "id": "chatcmpl-abc123",
            "object": "chat.completion",
            "created": 1728000000,
            "model": "openai/gpt-oss-120b",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "4"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 20, "completion_tokens": 1, "total_tokens": 21}
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.id, "chatcmpl-abc123");
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content.as_deref(), Some("4"));
        assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
        assert_eq!(response.usage.unwrap().total_tokens, 21);
    }

    #[test]
    fn test_response_without_usage() {
        let json = r#"{
            "id": "chatcmpl-xyz",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Hello"}
            }]
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert!(response.usage.is_none());
        assert!(response.choices[0].finish_reason.is_none());
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{
            "error": {
                "message": "The model `nope` does not exist",
                "type": "invalid_request_error",
                "code": "model_not_found"
            }
        }"#;

        let response: GroqErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error.code.as_deref(), Some("model_not_found"));
        assert_eq!(
            response.error.error_type.as_deref(),
            Some("invalid_request_error")
        );
        assert!(response.error.message.contains("does not exist"));
    }
}
