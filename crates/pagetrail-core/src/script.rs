//! History script parsing
//!
//! ```text
//! 3                                  capacity
//! https://a.example                  one visited URL per line
//! https://b.example
//! Backward Backward Forward          first line holding a command token
//! ```
//!
//! Blank lines are skipped. Anything after the command line is ignored.

use std::path::Path;

use pagetrail_navigation::Command;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub capacity: usize,
    pub urls: Vec<String>,
    pub commands: Vec<String>,
}

impl Script {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = raw.len(), "Read script");
        Self::parse(&raw)
    }

    pub fn parse(input: &str) -> Result<Self> {
        let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));

        let (line_no, header) = lines
            .by_ref()
            .find(|(_, line)| !line.trim().is_empty())
            .ok_or_else(|| CoreError::script(1, "missing capacity"))?;

        let mut header_tokens = header.split_whitespace();
        let capacity = header_tokens
            .next()
            .unwrap_or_default()
            .parse::<usize>()
            .map_err(|_| {
                CoreError::script(
                    line_no,
                    format!("capacity must be a non-negative integer, got {:?}", header.trim()),
                )
            })?;

        if header_tokens.next().is_some() {
            tracing::debug!(line = line_no, "Ignoring text after capacity");
        }

        let mut urls = Vec::new();
        let mut commands = Vec::new();

        for (_, line) in lines.by_ref() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if Command::is_command_line(line) {
                commands = line.split_whitespace().map(str::to_string).collect();
                break;
            }

            urls.push(line.to_string());
        }

        let trailing = lines.filter(|(_, line)| !line.trim().is_empty()).count();
        if trailing > 0 {
            tracing::debug!(trailing, "Ignoring lines after command line");
        }

        tracing::debug!(
            capacity,
            urls = urls.len(),
            commands = commands.len(),
            "Parsed script"
        );

        Ok(Self {
            capacity,
            urls,
            commands,
        })
    }
}
