//! Picdiff: turn Piccolo change reports into review-ready diffs.
//!
//! This is the main entry point for the `picdiff` CLI. It parses arguments,
//! installs logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
pub mod classify;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod piccolo;
pub mod report;
pub mod review;
pub mod version;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("Warning: {:#}", err);
    }

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
