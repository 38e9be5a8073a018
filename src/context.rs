//! Context Assembler
//!
//! Pure transformation from stored history plus a new message into the
//! ordered message list sent to the model. No state, no I/O.

use crate::history::ChatTurn;
use crate::llm::ChatMessage;

/// Build the message list for one inference call.
///
/// The sequence is: one system instruction, then for each replayed turn a
/// user message (its question) and an assistant message (its answer), then
/// the new user message. With no window the full history is replayed and
/// the result has length `2 * turns.len() + 2`.
///
/// `window`, when set, bounds replay to the most recent N turns. It bounds
/// only what the model sees; persistence is unaffected.
pub fn assemble_context(
    system_prompt: &str,
    turns: &[ChatTurn],
    new_message: &str,
    window: Option<usize>,
) -> Vec<ChatMessage> {
    let replayed = match window {
        Some(limit) => &turns[turns.len().saturating_sub(limit)..],
        None => turns,
    };

    let mut messages = Vec::with_capacity(2 * replayed.len() + 2);
    messages.push(ChatMessage::system(system_prompt));

    for turn in replayed {
        messages.push(ChatMessage::user(&turn.student_question));
        messages.push(ChatMessage::assistant(&turn.bot_answer));
    }

    messages.push(ChatMessage::user(new_message));
    messages
}
