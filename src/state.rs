// Shared handler dependencies

use std::sync::Arc;

use crate::history::HistoryStore;
use crate::llm::{GenerationConfig, InferenceClient};

/// Dependencies the request handlers operate on.
///
/// The store and the inference client are explicit trait objects rather
/// than process-wide singletons, so tests can wire in fakes and `main`
/// owns connection lifetimes.
pub struct AppState {
    /// Persistence for chat turns
    pub history: Arc<dyn HistoryStore>,

    /// Boundary to the hosted model API
    pub llm: Arc<dyn InferenceClient>,

    /// Fixed instruction prepended to every conversation
    pub system_prompt: String,

    /// Most-recent turns replayed as context; `None` replays everything
    pub history_window: Option<usize>,

    /// Generation parameters for every inference call
    pub generation: GenerationConfig,
}
