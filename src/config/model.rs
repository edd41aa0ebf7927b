//! RulesConfig struct definition and defaults.

use crate::rules::RuleSpec;
use serde::{Deserialize, Serialize};

/// Contents of a rules file.
///
/// ```yaml
/// default_rule: teensy-loader
/// rules:
///   - name: teensy-loader
///     pattern: 'recipe\.hooks\.postbuild\.[0-9]\.pattern="\{teensytools\.path\}teensy_post_compile"'
///     require_match: true
/// ```
///
/// Rules defined here shadow built-in rules with the same name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Name of the rule to use when the CLI selects none.
    ///
    /// Must name a rule from this file or a built-in. When absent, the
    /// built-in default applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_rule: Option<String>,

    /// Named rules.
    pub rules: Vec<RuleSpec>,
}
