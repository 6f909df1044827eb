//! Replay configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pagetrail_navigation::MovePolicy;

use crate::error::CoreError;
use crate::Result;

/// Script file read when none is given
pub const DEFAULT_SCRIPT: &str = "URLs.txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Console layout of the classic stack exercise
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the history script
    pub script_path: PathBuf,
    /// How moves behave when the destination stack is full
    pub move_policy: MovePolicy,
    /// Report format written to stdout
    pub format: OutputFormat,
    /// Replaces the capacity declared by the script
    pub capacity_override: Option<usize>,
}

impl Config {
    pub fn new(script_path: PathBuf) -> Self {
        Self {
            script_path,
            move_policy: MovePolicy::default(),
            format: OutputFormat::default(),
            capacity_override: None,
        }
    }

    /// Load a JSON config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&raw)
            .map_err(|e| CoreError::Config(format!("invalid {}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), ?config, "Loaded config file");
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_SCRIPT))
    }
}
