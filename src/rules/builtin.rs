//! Built-in rules.
//!
//! These cover the two shapes of the Teensy post-compile hook seen in
//! generated platform files. `teensy-post-compile` matches the fixed
//! `{compiler.path}` form at hook index 3; `teensy-loader` matches the
//! `{teensytools.path}` form at any single-digit hook index and treats a
//! missing directive as an error, since that directive going missing means
//! the upstream core changed its platform.txt layout.

use super::RuleSpec;

/// Name of the rule used when none is selected.
pub const DEFAULT_RULE: &str = "teensy-post-compile";

/// The spec of the default rule.
pub fn default_spec() -> RuleSpec {
    RuleSpec::prefix(
        DEFAULT_RULE,
        r#"recipe.hooks.postbuild.3.pattern="{compiler.path}teensy_post_compile""#,
    )
}

/// All built-in rule specs.
pub fn builtin_specs() -> Vec<RuleSpec> {
    vec![
        default_spec(),
        RuleSpec::pattern(
            "teensy-loader",
            r#"recipe\.hooks\.postbuild\.[0-9]\.pattern="\{teensytools\.path\}teensy_post_compile""#,
        )
        .with_require_match(true),
    ]
}

/// Look up a built-in rule by name.
pub fn find_builtin(name: &str) -> Option<RuleSpec> {
    builtin_specs().into_iter().find(|spec| spec.name == name)
}
