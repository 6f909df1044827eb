//! Replay coordination
//!
//! Owns the configuration, builds a fresh [`HistorySession`] per run and
//! collects everything the renderers need into a [`ReplayOutcome`].

use serde::{Deserialize, Serialize};

use pagetrail_navigation::{CommandReplayer, HistorySession, MovePolicy, StepReport};

use crate::config::Config;
use crate::script::Script;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayOutcome {
    pub capacity: usize,
    pub policy: MovePolicy,
    /// Number of URLs that made it onto the back stack
    pub loaded: usize,
    /// URLs turned away because the back stack was already full
    pub rejected: Vec<String>,
    pub steps: Vec<StepReport>,
}

pub struct Simulator {
    config: Config,
}

impl Simulator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read and replay the configured script file
    pub fn run_script_file(&self) -> Result<ReplayOutcome> {
        let script = Script::from_path(&self.config.script_path)?;
        Ok(self.run(&script))
    }

    /// Load the script's URLs and replay its commands
    pub fn run(&self, script: &Script) -> ReplayOutcome {
        let capacity = self.config.capacity_override.unwrap_or(script.capacity);
        let policy = self.config.move_policy;
        let mut session = HistorySession::with_policy(capacity, policy);

        let mut rejected = Vec::new();
        for url in &script.urls {
            if let Err(e) = session.visit(url.as_str()) {
                tracing::warn!(%url, "Visit rejected: {}", e);
                rejected.push(url.clone());
            }
        }
        let loaded = session.back().len();

        tracing::info!(
            capacity,
            %policy,
            loaded,
            rejected = rejected.len(),
            commands = script.commands.len(),
            "Starting replay"
        );

        let steps = CommandReplayer::new(&mut session, script.commands.iter()).run_to_end();

        tracing::info!(
            steps = steps.len(),
            succeeded = steps.iter().filter(|s| s.is_success()).count(),
            current = session.current().unwrap_or_default(),
            "Replay finished"
        );

        ReplayOutcome {
            capacity: session.capacity(),
            policy: session.policy(),
            loaded,
            rejected,
            steps,
        }
    }
}
