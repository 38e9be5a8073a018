//! Store trait the request handler depends on

use async_trait::async_trait;

use super::error::Result;
use super::types::{ChatTurn, NewChatTurn};

/// Append-only log of chat turns.
///
/// The contract is deliberately small: one append per successful request,
/// one full ordered read per request. There is no filtering, pagination or
/// deletion. Handlers hold this as a trait object so tests can substitute
/// an in-memory fake.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append a turn and return the stored record with its assigned
    /// id, timestamp and position.
    async fn append(&self, turn: NewChatTurn) -> Result<ChatTurn>;

    /// Read every stored turn, ordered by timestamp ascending.
    async fn read_all(&self) -> Result<Vec<ChatTurn>>;
}
