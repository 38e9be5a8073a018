// HTTP API types (requests, responses)

use serde::{Deserialize, Serialize};

// Request Types
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

// Response Types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: "studybot".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_deserialization() {
        let json = r#"{"message":"What is 2+2?"}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.message, "What is 2+2?");
    }

    #[test]
    fn test_chat_request_missing_message_is_rejected() {
        let result = serde_json::from_str::<ChatRequest>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_response_serialization() {
        let response = ChatResponse {
            response: "4".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"response":"4"}"#);
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse::ok();
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["service"], "studybot");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse {
            error: "inference call failed".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"error":"inference call failed"}"#);
    }
}
