//! Provider trait for inference client implementations

use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{Completion, CompletionRequest},
};

/// Interface the request handler depends on for model inference.
///
/// Implementations send the assembled message list to a hosted model API and
/// block until a complete response is available. Handlers hold this as a
/// trait object so tests can substitute a fake.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Generate a complete response for the given conversation.
    ///
    /// # Arguments
    /// * `request` - The completion request with messages and config
    ///
    /// # Returns
    /// The generated completion, or an error if the request fails
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError>;
}
