//! pagetrail - command-line front end
//!
//! Resolves the configuration, replays the script and prints the report.

pub mod cli;

use anyhow::Context;
use std::io::Write;

use cli::Cli;
use pagetrail_core::{Config, Simulator};

/// Merge the optional config file with command-line overrides
pub fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(script) = &cli.script {
        config.script_path = script.clone();
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(policy) = cli.policy {
        config.move_policy = policy;
    }
    if cli.capacity.is_some() {
        config.capacity_override = cli.capacity;
    }

    Ok(config)
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    pagetrail_core::init_logging(if cli.verbose { "debug" } else { "warn" });

    let config = resolve_config(&cli)?;
    let simulator = Simulator::new(config);

    let outcome = simulator.run_script_file().with_context(|| {
        format!(
            "cannot replay {}",
            simulator.config().script_path.display()
        )
    })?;

    let report = pagetrail_core::render(&outcome, simulator.config().format)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .context("failed to write report")?;
    stdout.flush()?;

    tracing::info!(steps = outcome.steps.len(), "pagetrail finished");
    Ok(())
}
