//! Navigation error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every variant is recoverable: the replay loop reports it and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationError {
    #[error("Stack is full (capacity {capacity})")]
    StackFull { capacity: usize },

    #[error("Cannot go backward. Already at the oldest page.")]
    AtOldest,

    #[error("Cannot go forward. No forward history available.")]
    NoForwardHistory,

    #[error("Cannot go backward. Forward history is full.")]
    ForwardFull { url: String },

    #[error("Cannot go forward. Back history is full.")]
    BackFull { url: String },

    #[error("Unrecognized command: {token}")]
    UnrecognizedCommand { token: String },
}
