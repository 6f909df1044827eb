//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

use pagetrail_core::{MovePolicy, OutputFormat};

/// Replay a browser back/forward history script
#[derive(Debug, Parser)]
#[command(name = "pagetrail")]
#[command(
    author,
    version,
    about = "Replay a browser back/forward history script",
    long_about = None,
    after_help = "SCRIPT FORMAT:\n  <capacity>\n  <url>\n  <url>\n  ...\n  Backward Forward Backward ...\n\nEXAMPLES:\n  pagetrail\n  pagetrail history.txt --format json\n  pagetrail history.txt --policy transactional --capacity 3"
)]
pub struct Cli {
    /// History script to replay (default: URLs.txt, or the config file's script_path)
    pub script: Option<PathBuf>,

    /// JSON config file; flags given on the command line win over it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: text (console layout) or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Move policy when the destination stack is full: lossy or transactional
    #[arg(short, long)]
    pub policy: Option<MovePolicy>,

    /// Override the capacity declared by the script
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Log replay details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
