use clap::Parser;
use std::process::ExitCode;

use pagetrail_lib::cli::Cli;

fn main() -> ExitCode {
    match pagetrail_lib::run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
