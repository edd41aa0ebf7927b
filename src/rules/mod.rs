//! Match rules for hookstrip.
//!
//! A rule identifies the platform.txt lines to remove. Rules exist in two
//! forms:
//!
//! - [`RuleSpec`]: the data form (name, literal prefix or regex source, and
//!   the zero-match policy). This is what the rules file and the built-in
//!   table hold.
//! - [`CompiledRule`]: the spec compiled for matching, regex built once per
//!   run. Invalid patterns are config errors (exit 1), not no-match failures.

mod builtin;
mod matcher;
mod types;


pub use builtin::{DEFAULT_RULE, builtin_specs, default_spec, find_builtin};
pub use matcher::{CompiledRule, MatchRule};
pub use types::RuleSpec;
