//! Presets command — list the named option bundles.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;

use fastformat_core::{FormatOptions, Preset};

/// Arguments for the `presets` subcommand.
#[derive(Args, Debug, Default)]
pub struct PresetsArgs {
    // No subcommand-specific arguments; uses global --json flag
}

const ALL_PRESETS: &[Preset] = &[Preset::Default, Preset::Narrative, Preset::Formal];

#[derive(Serialize)]
struct PresetInfo {
    name: &'static str,
    options: FormatOptions,
}

/// List available presets and their settings.
#[instrument(name = "cmd_presets", skip_all)]
pub fn cmd_presets(_args: PresetsArgs, global_json: bool) -> anyhow::Result<()> {
    if global_json {
        let list: Vec<PresetInfo> = ALL_PRESETS
            .iter()
            .map(|p| PresetInfo {
                name: p.as_str(),
                options: p.options(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    for preset in ALL_PRESETS {
        let opts = preset.options();
        println!("{}", preset.as_str().bold());
        println!("  {}: {}", "quote style".dimmed(), opts.quote_style);
        println!("  {}: {:?}", "dialogue dash".dimmed(), opts.dialogue_dash);
        println!("  {}: {:?}", "aside dash".dimmed(), opts.aside_dash);
        println!("  {}: {:?}", "range dash".dimmed(), opts.numeric_range_dash);
        println!("  {}: {}", "max blank lines".dimmed(), opts.max_blank_lines);
        println!("  {}: {}", "tidy units".dimmed(), opts.tidy_units);
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_json_succeed() {
        assert!(cmd_presets(PresetsArgs::default(), false).is_ok());
        assert!(cmd_presets(PresetsArgs::default(), true).is_ok());
    }

    #[test]
    fn all_presets_covered() {
        assert_eq!(ALL_PRESETS.len(), fastformat_core::PRESET_NAMES.len());
        for (preset, name) in ALL_PRESETS.iter().zip(fastformat_core::PRESET_NAMES) {
            assert_eq!(preset.as_str(), *name);
        }
    }
}
