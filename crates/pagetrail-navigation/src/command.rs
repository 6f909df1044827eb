//! Navigation commands
//!
//! - `Backward`: go to the previous page
//! - `Forward`: go to the next page
//!
//! Tokens are case-sensitive and decoded once, at the script boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Move the current page onto the forward stack
    Backward,
    /// Move the next page back onto the back stack
    Forward,
}

impl Command {
    /// Parse a single command token
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "Backward" => Some(Command::Backward),
            "Forward" => Some(Command::Forward),
            _ => None,
        }
    }

    /// True if the line holds at least one command token
    pub fn is_command_line(line: &str) -> bool {
        line.split_whitespace().any(|token| Self::parse(token).is_some())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Backward => "Backward",
            Command::Forward => "Forward",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
