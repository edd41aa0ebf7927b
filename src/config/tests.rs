//! Tests for rules file parsing and validation.

use super::RulesConfig;
use crate::rules::DEFAULT_RULE;
use std::fs;
use tempfile::TempDir;

#[test]
fn default_config_is_empty() {
    let config = RulesConfig::default();

    assert!(config.default_rule.is_none());
    assert!(config.rules.is_empty());
    config.validate().unwrap();
}

#[test]
fn parse_empty_yaml() {
    let config = RulesConfig::from_yaml("{}").unwrap();

    assert!(config.rules.is_empty());
}

#[test]
fn parse_rules() {
    let yaml = r#"
default_rule: strip-debug
rules:
  - name: strip-debug
    prefix: "build.debug_flags="
  - name: strip-upload
    pattern: 'tools\.[a-z]+\.upload\.'
    require_match: true
"#;
    let config = RulesConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.default_rule.as_deref(), Some("strip-debug"));
    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.rules[0].prefix.as_deref(), Some("build.debug_flags="));
    assert!(!config.rules[0].require_match);
    assert!(config.rules[1].require_match);
}

#[test]
fn unknown_fields_are_ignored() {
    let yaml = r#"
future_option: true
rules:
  - name: r
    prefix: "a="
"#;
    let config = RulesConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.rules.len(), 1);
}

#[test]
fn empty_rule_name_is_rejected() {
    let yaml = r#"
rules:
  - name: ""
    prefix: "a="
"#;
    let err = RulesConfig::from_yaml(yaml).unwrap_err();

    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn duplicate_rule_names_are_rejected() {
    let yaml = r#"
rules:
  - name: twice
    prefix: "a="
  - name: twice
    prefix: "b="
"#;
    let err = RulesConfig::from_yaml(yaml).unwrap_err();

    assert!(err.to_string().contains("duplicate rule name 'twice'"));
}

#[test]
fn rule_with_both_forms_is_rejected() {
    let yaml = r#"
rules:
  - name: broken
    prefix: "a="
    pattern: "b="
"#;
    let err = RulesConfig::from_yaml(yaml).unwrap_err();

    assert!(err.to_string().contains("exactly one"));
}

#[test]
fn rule_with_neither_form_is_rejected() {
    let yaml = r#"
rules:
  - name: empty
"#;
    assert!(RulesConfig::from_yaml(yaml).is_err());
}

#[test]
fn default_rule_may_name_a_builtin() {
    let yaml = format!("default_rule: {}\n", DEFAULT_RULE);
    let config = RulesConfig::from_yaml(&yaml).unwrap();

    assert!(config.default_spec().is_some());
}

#[test]
fn unknown_default_rule_is_rejected() {
    let yaml = "default_rule: no-such-rule\n";
    let err = RulesConfig::from_yaml(yaml).unwrap_err();

    assert!(err.to_string().contains("no-such-rule"));
}

#[test]
fn file_rules_shadow_builtins() {
    let yaml = format!(
        r#"
rules:
  - name: {}
    prefix: "custom="
"#,
        DEFAULT_RULE
    );
    let config = RulesConfig::from_yaml(&yaml).unwrap();

    let spec = config.find_rule(DEFAULT_RULE).unwrap();
    assert_eq!(spec.prefix.as_deref(), Some("custom="));
}

#[test]
fn find_rule_falls_back_to_builtins() {
    let config = RulesConfig::default();

    assert!(config.find_rule("teensy-loader").is_some());
    assert!(config.find_rule("no-such-rule").is_none());
}

#[test]
fn load_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hookstrip.yaml");
    fs::write(&path, "rules:\n  - name: r\n    prefix: \"a=\"\n").unwrap();

    let config = RulesConfig::load(&path).unwrap();

    assert_eq!(config.rules.len(), 1);
}

#[test]
fn load_missing_file_is_a_user_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.yaml");

    let err = RulesConfig::load(&path).unwrap_err();

    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn yaml_round_trip() {
    let yaml = r#"
default_rule: r
rules:
  - name: r
    pattern: "a=[0-9]"
    require_match: true
"#;
    let config = RulesConfig::from_yaml(yaml).unwrap();
    let serialized = serde_yaml::to_string(&config).unwrap();
    let reparsed = RulesConfig::from_yaml(&serialized).unwrap();

    assert_eq!(reparsed.default_rule, config.default_rule);
    assert_eq!(reparsed.rules, config.rules);
}
