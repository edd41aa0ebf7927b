//! The strip command: resolve the rule, filter the file, report.

use crate::cli::Cli;
use crate::config::RulesConfig;
use crate::error::{HookstripError, Result};
use crate::filter::{FilterOptions, FilterOutcome, filter_file};
use crate::report::RemovalReport;
use crate::rules::{self, CompiledRule, RuleSpec};

/// Run a filtering pass as described by the CLI.
///
/// Prints one notice per removed line, writes the JSON report when asked,
/// and fails with `NoMatch` when the effective policy requires a match and
/// none was found. The report is written before the policy check so a failed
/// CI run still leaves a report showing the zero-removal scan.
pub fn cmd_strip(cli: &Cli) -> Result<()> {
    let config = match &cli.rules_file {
        Some(path) => RulesConfig::load(path)?,
        None => RulesConfig::default(),
    };

    let rule = resolve_rule(cli, &config)?;
    let require_match = effective_require_match(cli, &rule);

    let options = FilterOptions {
        check_only: cli.check,
    };
    let outcome = filter_file(&cli.file, &rule.rule, options)?;

    if !cli.quiet {
        print_notices(&outcome);
    }

    if let Some(report_path) = &cli.report {
        let file = cli.file.display().to_string();
        RemovalReport::from_outcome(&file, &rule.name, &outcome).write(report_path)?;
    }

    if require_match && !outcome.any_removed() {
        return Err(HookstripError::NoMatch {
            path: cli.file.display().to_string(),
            rule: rule.name,
        });
    }

    Ok(())
}

/// Resolve the effective rule for this invocation.
///
/// Precedence: an ad-hoc `--prefix`/`--pattern` rule, then `--rule <name>`,
/// then the rules file's `default_rule`, then the built-in default. Named
/// lookups search the rules file first, so file rules shadow built-ins.
fn resolve_rule(cli: &Cli, config: &RulesConfig) -> Result<CompiledRule> {
    if let Some(prefix) = &cli.prefix {
        return CompiledRule::from_spec(&RuleSpec::prefix("cli-prefix", prefix.clone()));
    }
    if let Some(pattern) = &cli.pattern {
        return CompiledRule::from_spec(&RuleSpec::pattern("cli-pattern", pattern.clone()));
    }

    let spec = match &cli.rule {
        Some(name) => config.find_rule(name).ok_or_else(|| {
            HookstripError::UserError(format!(
                "unknown rule '{}' (available: {})",
                name,
                available_rules(config)
            ))
        })?,
        None => config.default_spec().unwrap_or_else(rules::default_spec),
    };

    CompiledRule::from_spec(&spec)
}

/// The zero-match policy for this invocation.
///
/// CLI flags win over the rule's own policy; the flags are mutually
/// exclusive at the clap level.
fn effective_require_match(cli: &Cli, rule: &CompiledRule) -> bool {
    if cli.require_match {
        true
    } else if cli.allow_no_match {
        false
    } else {
        rule.require_match
    }
}

fn print_notices(outcome: &FilterOutcome) {
    for removed in &outcome.removed {
        if outcome.check_only {
            println!("Would remove line '{}'", removed.content);
        } else {
            println!("Removing line '{}'", removed.content);
        }
    }
}

fn available_rules(config: &RulesConfig) -> String {
    let mut names: Vec<String> = config.rules.iter().map(|s| s.name.clone()).collect();
    for spec in rules::builtin_specs() {
        if !names.contains(&spec.name) {
            names.push(spec.name);
        }
    }
    names.join(", ")
}
