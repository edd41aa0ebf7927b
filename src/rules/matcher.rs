//! Compiled match rules.

use super::RuleSpec;
use crate::error::{HookstripError, Result};
use regex::Regex;

/// A compiled match predicate.
///
/// Regexes are compiled once per run and reused across every line of the
/// scan.
#[derive(Debug, Clone)]
pub enum MatchRule {
    /// The line matches when it starts with this literal string.
    Prefix(String),
    /// The line matches when the regex matches starting at offset 0.
    Pattern(Regex),
}

impl MatchRule {
    /// Build a literal prefix rule.
    pub fn prefix(literal: impl Into<String>) -> Self {
        MatchRule::Prefix(literal.into())
    }

    /// Compile a pattern rule.
    ///
    /// An invalid pattern is a user error (exit 1): the rule came from a flag
    /// or a rules file, not from the scanned content.
    pub fn pattern(source: &str) -> Result<Self> {
        let regex = Regex::new(source).map_err(|e| {
            HookstripError::UserError(format!(
                "invalid regex pattern '{}': {}\n\
                 Fix: correct the pattern in the rules file or --pattern flag.",
                source, e
            ))
        })?;
        Ok(MatchRule::Pattern(regex))
    }

    /// Whether `line` satisfies the rule.
    ///
    /// `line` is expected with its terminator already stripped. Pattern rules
    /// require the match to begin at the start of the line; the pattern itself
    /// is never rewritten, so `[0-9]` wildcards and the like behave exactly as
    /// written.
    pub fn matches(&self, line: &str) -> bool {
        match self {
            MatchRule::Prefix(literal) => line.starts_with(literal.as_str()),
            MatchRule::Pattern(regex) => regex.find(line).is_some_and(|m| m.start() == 0),
        }
    }
}

/// A named, compiled rule plus its zero-match policy.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Rule name, used in messages and the removal report.
    pub name: String,
    /// The compiled match predicate.
    pub rule: MatchRule,
    /// Whether a zero-removal run is a failure.
    pub require_match: bool,
}

impl CompiledRule {
    /// Compile a rule spec.
    ///
    /// A spec with both or neither of `prefix`/`pattern` is rejected here as
    /// well as in rules-file validation, so ad-hoc specs built in code get the
    /// same check.
    pub fn from_spec(spec: &RuleSpec) -> Result<Self> {
        let rule = match (&spec.prefix, &spec.pattern) {
            (Some(prefix), None) => MatchRule::prefix(prefix.clone()),
            (None, Some(pattern)) => MatchRule::pattern(pattern)?,
            _ => {
                return Err(HookstripError::UserError(format!(
                    "rule '{}' must set exactly one of 'prefix' or 'pattern'",
                    spec.name
                )));
            }
        };

        Ok(Self {
            name: spec.name.clone(),
            rule,
            require_match: spec.require_match,
        })
    }
}
