//! Removal report for CI artifacts.
//!
//! When asked (`--report <path>`), the tool records what it did as a single
//! JSON document: timestamp, scanned file, effective rule, and the removed
//! lines. CI jobs archive the report next to the packaged core so a missing
//! or doubled removal can be diagnosed from the artifacts alone.

use crate::error::{HookstripError, Result};
use crate::filter::FilterOutcome;
use crate::fs::atomic_write_file;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A removed line as recorded in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportedLine {
    /// Line number in the input file (1-based).
    pub line: usize,
    /// Line content, terminator stripped.
    pub content: String,
}

/// A removal report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovalReport {
    /// When the pass ran.
    pub ts: DateTime<Utc>,
    /// Path of the scanned file, as given on the command line.
    pub file: String,
    /// Name of the effective rule.
    pub rule: String,
    /// Whether this was a check-only pass (file untouched).
    pub check_only: bool,
    /// Number of lines in the input file.
    pub total_lines: usize,
    /// Number of removed lines.
    pub removed_count: usize,
    /// The removed lines, in file order.
    pub removed: Vec<ReportedLine>,
}

impl RemovalReport {
    /// Build a report from a filtering outcome.
    pub fn from_outcome(file: &str, rule: &str, outcome: &FilterOutcome) -> Self {
        Self {
            ts: Utc::now(),
            file: file.to_string(),
            rule: rule.to_string(),
            check_only: outcome.check_only,
            total_lines: outcome.total_lines,
            removed_count: outcome.removed_count(),
            removed: outcome
                .removed
                .iter()
                .map(|r| ReportedLine {
                    line: r.number,
                    content: r.content.clone(),
                })
                .collect(),
        }
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HookstripError::UserError(format!("failed to serialize report: {}", e)))
    }

    /// Write the report to `path` atomically.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut json = self.to_json()?;
        json.push('\n');
        atomic_write_file(path, &json)
    }
}
