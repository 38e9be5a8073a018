// POST /chat handler

use std::sync::Arc;

use crate::context::assemble_context;
use crate::history::NewChatTurn;
use crate::llm::CompletionRequest;
use crate::models::{ChatRequest, ChatResponse};
use crate::state::AppState;

use super::reject::ApiError;

/// Orchestrates one chat request: read the stored history, assemble the
/// message list, call the model, append the new turn, respond.
///
/// A failed history read or inference call aborts the request with nothing
/// stored. A failed append after a successful inference is logged and the
/// answer is still returned; the history write is best-effort, not part of
/// a transaction.
pub async fn chat_handler(
    state: Arc<AppState>,
    request: ChatRequest,
) -> Result<impl warp::Reply, warp::Rejection> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::bad_request("message must not be empty"));
    }

    let turns = state.history.read_all().await.map_err(|e| {
        tracing::error!(error = %e, "history read failed");
        ApiError::internal("failed to read conversation history")
    })?;

    tracing::info!(prior_turns = turns.len(), "POST /chat");

    let messages = assemble_context(
        &state.system_prompt,
        &turns,
        message,
        state.history_window,
    );

    let completion = state
        .llm
        .complete(CompletionRequest {
            messages,
            config: state.generation.clone(),
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "inference call failed");
            ApiError::bad_gateway("inference call failed")
        })?;

    if let Some(usage) = completion.usage {
        tracing::debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "completion received"
        );
    }

    match state
        .history
        .append(NewChatTurn::new(message, &completion.text))
        .await
    {
        Ok(turn) => tracing::debug!(turn_id = %turn.id, "chat turn persisted"),
        Err(e) => tracing::warn!(error = %e, "failed to persist chat turn"),
    }

    Ok(warp::reply::json(&ChatResponse {
        response: completion.text,
    }))
}
