//! Line splitting and partitioning.
//!
//! Lines keep their terminators through the split so that concatenating the
//! kept slices reproduces the input byte-for-byte. Matching happens on the
//! terminator-stripped text, so rules behave identically on LF and CRLF
//! files.

use crate::rules::MatchRule;

/// A line removed by a filtering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedLine {
    /// Line number in the input file (1-based).
    pub number: usize,
    /// Line content with its terminator stripped.
    pub content: String,
}

/// Split `content` into lines, each retaining its `\n` terminator.
///
/// A final line without a terminator is returned as-is; an empty input
/// yields no lines.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Strip the trailing `\n` or `\r\n` from a raw line.
fn displayed(raw: &str) -> &str {
    raw.strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(raw)
}

/// Partition `lines` into kept raw slices and removed line records.
///
/// Kept slices are the untouched input slices (terminator included);
/// removed records carry the 1-based line number and the display content.
pub fn partition_lines<'a>(
    lines: &[&'a str],
    rule: &MatchRule,
) -> (Vec<&'a str>, Vec<RemovedLine>) {
    let mut kept = Vec::with_capacity(lines.len());
    let mut removed = Vec::new();

    for (index, raw) in lines.iter().enumerate() {
        let text = displayed(raw);
        if rule.matches(text) {
            removed.push(RemovedLine {
                number: index + 1,
                content: text.to_string(),
            });
        } else {
            kept.push(*raw);
        }
    }

    (kept, removed)
}
