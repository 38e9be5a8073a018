use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question/answer pair to be appended to the history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChatTurn {
    /// The user's submitted message
    pub student_question: String,

    /// The model's generated reply
    pub bot_answer: String,
}

impl NewChatTurn {
    /// Create a new turn for writing
    pub fn new(student_question: impl Into<String>, bot_answer: impl Into<String>) -> Self {
        Self {
            student_question: student_question.into(),
            bot_answer: bot_answer.into(),
        }
    }
}

/// A persisted question/answer pair
///
/// Records are immutable once written; the store never updates or deletes
/// them. `timestamp` is assigned by the database at write time and is the
/// ordering key on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Unique identifier for the turn
    pub id: Uuid,

    /// The user's submitted message
    pub student_question: String,

    /// The model's generated reply
    pub bot_answer: String,

    /// UTC timestamp assigned when the turn was written
    pub timestamp: DateTime<Utc>,

    /// Insertion ordinal, breaks timestamp ties
    pub position: i64,
}
