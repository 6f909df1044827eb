//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Script error at line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    pub(crate) fn script(line: usize, message: impl Into<String>) -> Self {
        CoreError::Script {
            line,
            message: message.into(),
        }
    }
}
