//! CLI argument parsing for hookstrip.
//!
//! Uses clap derive macros for declarative argument definitions. The tool is
//! single-purpose, so the surface is one positional file path plus flags; the
//! actual work happens in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Hookstrip: strip build-hook directive lines from Arduino platform definition files.
///
/// Reads the file, removes every line matching the selected rule, and writes
/// the remaining lines back unchanged. Intended to run as a CI packaging step,
/// e.g. removing the Teensy post-compile upload hook before a core is archived.
#[derive(Parser, Debug)]
#[command(name = "hookstrip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the platform definition file to edit in place.
    pub file: PathBuf,

    /// Named rule to apply (a built-in, or one defined in --rules-file).
    ///
    /// Defaults to the built-in `teensy-post-compile` rule, or to the rules
    /// file's `default_rule` when one is configured.
    #[arg(long, conflicts_with_all = ["prefix", "pattern"])]
    pub rule: Option<String>,

    /// Ad-hoc rule: remove lines starting with this literal string.
    #[arg(long, conflicts_with = "pattern")]
    pub prefix: Option<String>,

    /// Ad-hoc rule: remove lines this regex matches at line start.
    #[arg(long)]
    pub pattern: Option<String>,

    /// YAML rules file supplying named rules and an optional default.
    #[arg(long, value_name = "PATH")]
    pub rules_file: Option<PathBuf>,

    /// Fail (exit 2) when no line matched, regardless of the rule's policy.
    #[arg(long, conflicts_with = "allow_no_match")]
    pub require_match: bool,

    /// Succeed on a zero-match run, regardless of the rule's policy.
    #[arg(long)]
    pub allow_no_match: bool,

    /// Scan and report matches without modifying the file.
    #[arg(long)]
    pub check: bool,

    /// Suppress per-line removal notices.
    #[arg(short, long)]
    pub quiet: bool,

    /// Write a JSON removal report to this path.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
