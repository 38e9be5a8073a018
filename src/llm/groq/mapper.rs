//! Conversion between the core abstraction and Groq wire types

use crate::llm::core::{
    error::LlmError,
    types::{Completion, CompletionRequest, FinishReason, Usage},
};

use super::types::{ChatCompletionRequest, ChatCompletionResponse, GroqMessage};

/// Convert a core completion request into the Groq wire format
pub fn to_groq_request(model: &str, request: CompletionRequest) -> ChatCompletionRequest {
    let messages = request
        .messages
        .into_iter()
        .map(|msg| GroqMessage {
            role: msg.role.as_str().to_string(),
            content: msg.content,
        })
        .collect();

    ChatCompletionRequest {
        model: model.to_string(),
        messages,
        max_tokens: request.config.max_tokens,
        temperature: request.config.temperature,
        top_p: request.config.top_p,
        stop: request.config.stop,
        stream: false,
    }
}

/// Extract a completion from the Groq wire response
///
/// The API returns one choice for non-streaming requests without `n`; the
/// first choice carries the answer.
pub fn from_groq_response(response: ChatCompletionResponse) -> Result<Completion, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::MalformedResponse("response contained no choices".to_string()))?;

    let text = choice.message.content.ok_or_else(|| {
        LlmError::MalformedResponse("first choice contained no text content".to_string())
    })?;

    let finish_reason = choice
        .finish_reason
        .as_deref()
        .map(FinishReason::from_wire)
        .unwrap_or(FinishReason::Stop);

    let usage = response
        .usage
        .map(|u| Usage::new(u.prompt_tokens, u.completion_tokens));

    Ok(Completion {
        text,
        finish_reason,
        usage,
    })
}
