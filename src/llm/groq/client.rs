//! Groq client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::llm::core::{
    error::LlmError,
    provider::InferenceClient,
    types::{Completion, CompletionRequest},
};

use super::mapper::{from_groq_response, to_groq_request};
use super::types::{ChatCompletionResponse, GroqErrorResponse};

/// Default base URL for the Groq OpenAI-compatible API
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Groq model identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroqModel {
    /// GPT-OSS 120B
    GptOss120b,
    /// GPT-OSS 20B
    GptOss20b,
    /// Llama 3.3 70B Versatile
    Llama33_70bVersatile,
}

impl GroqModel {
    /// Get the model identifier string for the API
    pub fn as_str(&self) -> &str {
        match self {
            GroqModel::GptOss120b => "openai/gpt-oss-120b",
            GroqModel::GptOss20b => "openai/gpt-oss-20b",
            GroqModel::Llama33_70bVersatile => "llama-3.3-70b-versatile",
        }
    }
}

impl std::str::FromStr for GroqModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai/gpt-oss-120b" => Ok(GroqModel::GptOss120b),
            "openai/gpt-oss-20b" => Ok(GroqModel::GptOss20b),
            "llama-3.3-70b-versatile" => Ok(GroqModel::Llama33_70bVersatile),
            other => Err(format!("unknown Groq model identifier: {}", other)),
        }
    }
}

/// Client for the Groq chat completions API
pub struct GroqClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Bearer API key
    api_key: String,
    /// API base URL, overridable for testing
    base_url: String,
    /// Model to use
    model: GroqModel,
}

impl GroqClient {
    /// Create a new Groq client
    ///
    /// # Arguments
    ///
    /// * `api_key` - Groq API key
    /// * `model` - Model to use
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: String, model: GroqModel) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        })
    }

    /// Override the API base URL (used by integration tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the chat completions endpoint URL
    fn build_endpoint_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Make a completion request to Groq
    async fn make_request(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        let groq_request = to_groq_request(self.model.as_str(), request);

        let url = self.build_endpoint_url();
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&groq_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.error_from_status(status, response).await);
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::SerializationError(e.to_string()))?;

        from_groq_response(completion)
    }

    /// Map a non-2xx response to an error
    async fn error_from_status(&self, status: StatusCode, response: reqwest::Response) -> LlmError {
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);
            return LlmError::RateLimitExceeded { retry_after };
        }

        let body = response.text().await.unwrap_or_else(|_| String::new());

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return LlmError::AuthenticationError(body);
        }

        // Groq wraps failures in an OpenAI-style error envelope
        if let Ok(envelope) = serde_json::from_str::<GroqErrorResponse>(&body) {
            let code = envelope
                .error
                .code
                .or(envelope.error.error_type)
                .unwrap_or_else(|| status.as_u16().to_string());
            return LlmError::ApiError {
                code,
                message: envelope.error.message,
            };
        }

        LlmError::HttpError {
            status: status.as_u16(),
            body,
        }
    }
}

#[async_trait]
impl InferenceClient for GroqClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        self.make_request(request).await
    }
}
