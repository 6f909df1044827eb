//! pagetrail Core
//!
//! Glue around the navigation stacks: reads a history script, replays it
//! through a [`HistorySession`] and renders the per-command reports.

mod config;
mod error;
mod render;
mod script;
mod simulator;

pub use config::{Config, OutputFormat, DEFAULT_SCRIPT};
pub use error::CoreError;
pub use render::{render, render_json, render_text};
pub use script::Script;
pub use simulator::{ReplayOutcome, Simulator};

// Re-export navigation components
pub use pagetrail_navigation::{
    Command, CommandReplayer, HistorySession, MovePolicy, NavigationError, NavigationStack, Side,
    StepOutcome, StepReport, Transition,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
///
/// Logs go to stderr so the report on stdout stays clean. `RUST_LOG` wins over
/// `default_directive` when set.
pub fn init_logging(default_directive: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
