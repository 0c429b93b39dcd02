//! Error types for the mockup client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the mockup service
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP exchange itself failed (connection refused, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response payload was not valid JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The RPC envelope carried an `error` member
    #[error("MCP error: {0}")]
    RemoteProtocol(serde_json::Value),

    /// The tool ran but reported `isError: true`
    #[error("Tool error in {tool}: {message}")]
    ToolExecution { tool: String, message: String },

    /// The tool succeeded but its output lacked something we rely on
    #[error("Unexpected tool result: {0}")]
    UnexpectedResult(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Transport(format!("request timed out: {}", err))
        } else {
            Error::Transport(err.to_string())
        }
    }
}
