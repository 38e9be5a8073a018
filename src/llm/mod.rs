//! Inference layer
//!
//! This module provides the boundary to the hosted model API: core
//! conversation types, the `InferenceClient` trait the request handler
//! depends on, and the Groq chat completions implementation.

pub mod core;
pub mod groq;

// Re-export commonly used types
pub use core::{
    config::GenerationConfig,
    error::LlmError,
    provider::InferenceClient,
    types::{ChatMessage, Completion, CompletionRequest, FinishReason, Role, Usage},
};

pub use groq::{GroqClient, GroqModel};
