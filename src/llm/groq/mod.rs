//! Groq provider implementation
//!
//! This module provides a client for the Groq hosted model API, which speaks
//! the OpenAI chat completions wire format.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export commonly used types
pub use client::{GroqClient, GroqModel, DEFAULT_BASE_URL};
