// Handlers module

pub mod chat;
pub mod health;
pub mod reject;

pub use chat::chat_handler;
pub use health::health_handler;
pub use reject::{handle_rejection, ApiError};
