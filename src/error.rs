//! Error types for Switchboard
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Switchboard
#[derive(Debug, Error)]
pub enum SwitchboardError {
    /// Server name not present in the static registry
    #[error("Unknown MCP server: {0}")]
    UnknownServer(String),

    /// Configuration error (bad value, unreadable overlay file)
    #[error("Config error: {0}")]
    Config(String),

    /// LLM API error
    #[error("LLM error: {0}")]
    Llm(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Switchboard operations
pub type Result<T> = std::result::Result<T, SwitchboardError>;
