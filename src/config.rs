//! Environment-supplied service configuration

use std::net::SocketAddr;

use thiserror::Error;

use crate::llm::GroqModel;

/// Default model when `GROQ_MODEL` is unset
pub const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";

/// Default bind address when `BIND_ADDR` is unset
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3030";

/// Default system instruction prepended to every conversation
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful study assistant.";

/// Default max_tokens when `MAX_TOKENS` is unset
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Errors raised while loading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    /// A variable is set but unparsable
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Service configuration, resolved once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Groq API key (`GROQ_API_KEY`, required)
    pub groq_api_key: String,

    /// Model served by the inference API (`GROQ_MODEL`)
    pub model: GroqModel,

    /// PostgreSQL connection string (`DATABASE_URL`, required)
    pub database_url: String,

    /// Address the HTTP server binds to (`BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// System instruction for the Context Assembler (`SYSTEM_PROMPT`)
    pub system_prompt: String,

    /// Most-recent turns replayed as context (`HISTORY_WINDOW`); unset
    /// replays the full history
    pub history_window: Option<usize>,

    /// Generation token cap (`MAX_TOKENS`)
    pub max_tokens: u32,
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an injected lookup, so tests never
    /// mutate process-wide environment state
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let groq_api_key = lookup("GROQ_API_KEY").ok_or(ConfigError::Missing("GROQ_API_KEY"))?;

        let model = lookup("GROQ_MODEL")
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
            .parse::<GroqModel>()
            .map_err(|reason| ConfigError::Invalid {
                var: "GROQ_MODEL",
                reason,
            })?;

        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let system_prompt =
            lookup("SYSTEM_PROMPT").unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        let history_window = match lookup("HISTORY_WINDOW") {
            Some(raw) => Some(raw.parse::<usize>().map_err(|e| ConfigError::Invalid {
                var: "HISTORY_WINDOW",
                reason: e.to_string(),
            })?),
            None => None,
        };

        let max_tokens = match lookup("MAX_TOKENS") {
            Some(raw) => raw.parse::<u32>().map_err(|e| ConfigError::Invalid {
                var: "MAX_TOKENS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_MAX_TOKENS,
        };

        Ok(Self {
            groq_api_key,
            model,
            database_url,
            bind_addr,
            system_prompt,
            history_window,
            max_tokens,
        })
    }
}
