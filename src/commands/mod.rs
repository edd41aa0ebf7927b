//! Command implementation for hookstrip.
//!
//! The tool has exactly one operation, so there is no subcommand dispatch:
//! `run` hands the parsed CLI straight to the strip implementation.

mod strip;

use crate::cli::Cli;
use crate::error::Result;

/// Execute the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    strip::cmd_strip(&cli)
}
