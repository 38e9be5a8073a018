//! Error types for the inference layer

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the model API
#[derive(Debug, Error)]
pub enum LlmError {
    /// API key rejected or missing
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// HTTP request failures
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded (retry after {retry_after:?})")]
    RateLimitExceeded { retry_after: Option<Duration> },

    /// Structured error returned by the API
    #[error("API error ({code}): {message}")]
    ApiError { code: String, message: String },

    /// Response body did not contain a usable completion
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            LlmError::HttpError {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            LlmError::HttpError {
                status: 0,
                body: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_error() {
        let err = LlmError::AuthenticationError("Invalid API key".to_string());
        assert!(err.to_string().contains("Authentication error"));
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn test_http_error() {
        let err = LlmError::HttpError {
            status: 503,
            body: "Service unavailable".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("Service unavailable"));
    }

    #[test]
    fn test_rate_limit_error() {
        let err = LlmError::RateLimitExceeded {
            retry_after: Some(Duration::from_secs(60)),
        };
        assert!(err.to_string().contains("Rate limit exceeded"));
    }

    #[test]
    fn test_api_error() {
        let err = LlmError::ApiError {
            code: "model_not_found".to_string(),
            message: "The model does not exist".to_string(),
        };
        assert!(err.to_string().contains("model_not_found"));
        assert!(err.to_string().contains("The model does not exist"));
    }

    #[test]
    fn test_from_serde_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let llm_err: LlmError = json_err.into();
        assert!(matches!(llm_err, LlmError::SerializationError(_)));
    }
}
