//! Hookstrip: strip build-hook directive lines from Arduino platform definition files.
//!
//! This is the main entry point for the `hookstrip` CLI. It parses arguments,
//! runs the filtering pass, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod filter;
pub mod fs;
pub mod report;
pub mod rules;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
