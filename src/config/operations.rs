//! Rules file loading, validation, and rule lookup.

use super::model::RulesConfig;
use crate::error::{HookstripError, Result};
use crate::rules::{self, RuleSpec};
use std::collections::HashSet;
use std::path::Path;

impl RulesConfig {
    /// Load a rules file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            HookstripError::UserError(format!(
                "failed to read rules file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a rules file from a YAML string.
    ///
    /// Unknown fields are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: RulesConfig = serde_yaml::from_str(yaml)
            .map_err(|e| HookstripError::UserError(format!("failed to parse rules file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate rule definitions.
    ///
    /// Rules:
    /// - every rule name is non-empty and unique within the file
    /// - every rule sets exactly one of `prefix` / `pattern`
    /// - `default_rule`, when set, names a file rule or a built-in
    ///
    /// Pattern compilation is checked later, when the selected rule is
    /// compiled; a broken pattern in an unselected rule does not block a run.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for spec in &self.rules {
            if spec.name.is_empty() {
                return Err(HookstripError::UserError(
                    "rules file validation failed: rule names must be non-empty".to_string(),
                ));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(HookstripError::UserError(format!(
                    "rules file validation failed: duplicate rule name '{}'",
                    spec.name
                )));
            }
            match (&spec.prefix, &spec.pattern) {
                (Some(_), None) | (None, Some(_)) => {}
                _ => {
                    return Err(HookstripError::UserError(format!(
                        "rules file validation failed: rule '{}' must set exactly one of 'prefix' or 'pattern'",
                        spec.name
                    )));
                }
            }
        }

        if let Some(name) = &self.default_rule
            && self.find_rule(name).is_none()
        {
            return Err(HookstripError::UserError(format!(
                "rules file validation failed: default_rule '{}' is not defined (file rules: {}; built-ins: {})",
                name,
                names(&self.rules),
                names(&rules::builtin_specs()),
            )));
        }

        Ok(())
    }

    /// Look up a rule by name, file rules shadowing built-ins.
    pub fn find_rule(&self, name: &str) -> Option<RuleSpec> {
        self.rules
            .iter()
            .find(|spec| spec.name == name)
            .cloned()
            .or_else(|| rules::find_builtin(name))
    }

    /// The spec of the configured default rule, when one is set.
    pub fn default_spec(&self) -> Option<RuleSpec> {
        self.default_rule.as_deref().and_then(|n| self.find_rule(n))
    }
}

fn names(specs: &[RuleSpec]) -> String {
    if specs.is_empty() {
        return "none".to_string();
    }
    specs
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
