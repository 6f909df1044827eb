//! Command replay
//!
//! Drives a [`HistorySession`] with a sequence of command tokens and yields
//! one [`StepReport`] per token. Failed moves are reported, never fatal.

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::error::NavigationError;
use crate::session::{HistorySession, Transition};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "lowercase")]
pub enum StepOutcome {
    Moved(Transition),
    Failed(NavigationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// 1-based, counts every token including rejected ones
    pub choice: usize,
    /// Token exactly as it appeared in the script
    pub token: String,
    pub command: Option<Command>,
    /// Current page before the command ran
    pub before: Option<String>,
    pub outcome: StepOutcome,
}

impl StepReport {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, StepOutcome::Moved(_))
    }
}

/// Lazily replays tokens against a borrowed session.
///
/// Each call to `next` consumes one token, so the replay cannot be restarted.
pub struct CommandReplayer<'a, I> {
    session: &'a mut HistorySession,
    tokens: I,
    choice: usize,
}

impl<'a, I> CommandReplayer<'a, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new<T>(session: &'a mut HistorySession, tokens: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            session,
            tokens: tokens.into_iter(),
            choice: 0,
        }
    }

    /// Replay every remaining token
    pub fn run_to_end(self) -> Vec<StepReport> {
        self.collect()
    }

    fn step(&mut self, token: &str) -> StepReport {
        self.choice += 1;
        let before = self.session.current().map(str::to_string);
        let command = Command::parse(token);

        let result = match command {
            Some(Command::Backward) => self.session.go_backward(),
            Some(Command::Forward) => self.session.go_forward(),
            None => Err(NavigationError::UnrecognizedCommand {
                token: token.to_string(),
            }),
        };

        let outcome = match result {
            Ok(transition) => StepOutcome::Moved(transition),
            Err(e) => {
                tracing::debug!(choice = self.choice, %token, "Step failed: {}", e);
                StepOutcome::Failed(e)
            }
        };

        StepReport {
            choice: self.choice,
            token: token.to_string(),
            command,
            before,
            outcome,
        }
    }
}

impl<I> Iterator for CommandReplayer<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = StepReport;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        Some(self.step(token.as_ref()))
    }
}
