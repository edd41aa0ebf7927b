//! The line filter.
//!
//! This is the whole job of the tool: read a platform definition file, drop
//! every line the rule matches, write the rest back unchanged. The file is
//! fully buffered (these are small build-config files; streaming buys
//! nothing here) and the rewrite goes through the atomic fs layer.

mod lines;


pub use lines::{RemovedLine, partition_lines, split_lines};

use crate::error::{HookstripError, Result};
use crate::fs::atomic_write_file;
use crate::rules::MatchRule;
use std::path::Path;

/// Options for a filtering pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterOptions {
    /// Scan and report without modifying the file.
    pub check_only: bool,
}

/// Result of a filtering pass.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// The removed lines, in file order.
    pub removed: Vec<RemovedLine>,
    /// Number of lines in the input file.
    pub total_lines: usize,
    /// Whether the pass was check-only (file untouched).
    pub check_only: bool,
}

impl FilterOutcome {
    /// Whether at least one line was removed.
    pub fn any_removed(&self) -> bool {
        !self.removed.is_empty()
    }

    /// Number of removed lines.
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Rewrite `path` so that every line matching `rule` is removed.
///
/// All other lines are preserved byte-for-byte, terminators included, in
/// their original order. With `check_only` the file is left untouched and
/// only the outcome is returned.
pub fn filter_file<P: AsRef<Path>>(
    path: P,
    rule: &MatchRule,
    options: FilterOptions,
) -> Result<FilterOutcome> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| {
        HookstripError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;

    let all_lines = split_lines(&content);
    let total_lines = all_lines.len();
    let (kept, removed) = partition_lines(&all_lines, rule);

    if !options.check_only && !removed.is_empty() {
        let filtered: String = kept.concat();
        atomic_write_file(path, &filtered)?;
    }

    Ok(FilterOutcome {
        removed,
        total_lines,
        check_only: options.check_only,
    })
}
