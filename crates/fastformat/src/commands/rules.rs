//! Rules command — list the pipeline's rules in execution order.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;

use fastformat_core::rules;

/// Arguments for the `rules` subcommand.
#[derive(Args, Debug, Default)]
pub struct RulesArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct RuleInfo {
    name: &'static str,
    description: &'static str,
}

/// List rules in execution order with one-line descriptions.
#[instrument(name = "cmd_rules", skip_all)]
pub fn cmd_rules(_args: RulesArgs, global_json: bool) -> anyhow::Result<()> {
    if global_json {
        let list: Vec<RuleInfo> = rules::ALL_RULES
            .iter()
            .map(|&name| RuleInfo {
                name,
                description: rules::describe(name),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    println!("{}", "Rules (execution order):".bold());
    for (i, &name) in rules::ALL_RULES.iter().enumerate() {
        println!(
            "  {:>2}. {:<22} {}",
            i + 1,
            name.cyan(),
            rules::describe(name).dimmed()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_json_succeed() {
        assert!(cmd_rules(RulesArgs::default(), false).is_ok());
        assert!(cmd_rules(RulesArgs::default(), true).is_ok());
    }
}
