//! Error types for the hookstrip CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for hookstrip operations.
///
/// Each variant maps to a specific exit code so the CI caller can tell a
/// misconfigured invocation apart from a missing target directive.
#[derive(Error, Debug)]
pub enum HookstripError {
    /// User provided invalid arguments, the file could not be read or
    /// written, or a pattern/rules file failed to parse.
    #[error("{0}")]
    UserError(String),

    /// A require-match rule completed its scan without removing any line.
    ///
    /// This usually means the upstream file format changed and the target
    /// directive moved or was renamed.
    #[error("no line matching rule '{rule}' found in '{path}'")]
    NoMatch {
        /// Path of the scanned file.
        path: String,
        /// Name of the rule that expected a match.
        rule: String,
    },
}

impl HookstripError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            HookstripError::UserError(_) => exit_codes::USER_ERROR,
            HookstripError::NoMatch { .. } => exit_codes::NO_MATCH,
        }
    }
}

/// Result type alias for hookstrip operations.
pub type Result<T> = std::result::Result<T, HookstripError>;
