//! Serde-level rule definitions.

use serde::{Deserialize, Serialize};

/// A match rule in its data form.
///
/// Exactly one of `prefix` and `pattern` must be set:
///
/// - `prefix`: the line matches when it starts with this literal string.
/// - `pattern`: the line matches when this regular expression matches at the
///   start of the line.
///
/// Matching is evaluated against the line with its terminator stripped, so a
/// rule behaves the same on LF and CRLF files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Rule name, used for selection (`--rule`) and in messages.
    pub name: String,

    /// Literal prefix to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Regular expression to match at line start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Whether a run that removes zero lines is a failure.
    #[serde(default)]
    pub require_match: bool,
}

impl RuleSpec {
    /// Create a prefix rule.
    pub fn prefix(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: Some(prefix.into()),
            pattern: None,
            require_match: false,
        }
    }

    /// Create a pattern rule.
    pub fn pattern(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            pattern: Some(pattern.into()),
            require_match: false,
        }
    }

    /// Set the zero-match policy.
    pub fn with_require_match(mut self, require_match: bool) -> Self {
        self.require_match = require_match;
        self
    }
}
