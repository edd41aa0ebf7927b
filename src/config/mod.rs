//! Rules file support for hookstrip.
//!
//! The match rules are data, not control flow: a YAML rules file can supply
//! named rules and pick the default, so the same binary serves other
//! line-removal chores without a rebuild. Unknown fields in the YAML are
//! ignored for forward compatibility.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::RulesConfig;
