//! Format command — run the normalization pipeline over a manuscript.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use fastformat_core::config::Config;
use fastformat_core::{
    AsideDash, DialogueDash, FormatOptions, Preset, QuoteStyle, RangeDash, TransformReport, apply,
};

/// Arguments for the `format` subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// File to format (`-` reads stdin).
    pub file: Utf8PathBuf,

    /// Preset to start from (overrides config).
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Quote style to convert toward.
    #[arg(long, value_enum)]
    pub quote_style: Option<QuoteStyle>,

    /// Dialogue marker treatment for line-leading hyphens.
    #[arg(long, value_enum)]
    pub dialogue_dash: Option<DialogueDash>,

    /// Dash treatment for numeric ranges.
    #[arg(long, value_enum)]
    pub numeric_range_dash: Option<RangeDash>,

    /// Dash treatment for mid-sentence asides.
    #[arg(long, value_enum)]
    pub aside_dash: Option<AsideDash>,

    /// Maximum consecutive blank lines to keep.
    #[arg(long)]
    pub max_blank_lines: Option<usize>,

    /// Capitalize the first letter after sentence-ending punctuation.
    /// Heuristic; off in every preset.
    #[arg(long)]
    pub capitalize: bool,

    /// Disable number-unit spacing.
    #[arg(long)]
    pub no_units: bool,

    /// Rewrite the input file in place.
    #[arg(short, long, conflicts_with = "output")]
    pub write: bool,

    /// Write the result to FILE instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Print a unified diff instead of the formatted text.
    #[arg(long, conflicts_with_all = ["write", "output"])]
    pub diff: bool,

    /// Print the per-rule change report to stderr.
    #[arg(long)]
    pub report: bool,
}

impl FormatArgs {
    /// Resolved options: config/preset base with CLI flags layered on top.
    fn resolve_options(&self, config: &Config) -> FormatOptions {
        let mut opts = config.resolve_options(self.preset);
        if let Some(style) = self.quote_style {
            opts.quote_style = style;
        }
        if let Some(dash) = self.dialogue_dash {
            opts.dialogue_dash = dash;
        }
        if let Some(dash) = self.numeric_range_dash {
            opts.numeric_range_dash = dash;
        }
        if let Some(dash) = self.aside_dash {
            opts.aside_dash = dash;
        }
        if let Some(max) = self.max_blank_lines {
            opts.max_blank_lines = max;
        }
        if self.capitalize {
            opts.capitalize_sentences = true;
        }
        if self.no_units {
            opts.tidy_units = false;
        }
        opts
    }
}

#[derive(Serialize)]
struct FormatResult<'a> {
    file: &'a str,
    changed: bool,
    report: &'a TransformReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diff: Option<&'a str>,
}

/// Normalize a manuscript file.
#[instrument(name = "cmd_format", skip_all, fields(file = %args.file))]
pub fn cmd_format(
    args: FormatArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    if args.write && args.file == "-" {
        anyhow::bail!("--write requires a file path, not stdin");
    }

    let options = args.resolve_options(config);
    debug!(options = ?options, "resolved formatting options");

    let content = super::read_input(&args.file, max_input)?;
    let (formatted, report) = apply(&content, &options);
    let changed = report.any_changed();
    let diff = args
        .diff
        .then(|| fastformat_core::unified_diff(&content, &formatted));

    if global_json {
        // In-place and -o writes still happen; JSON then omits the text.
        let emit_text = !args.write && args.output.is_none() && !args.diff;
        let result = FormatResult {
            file: args.file.as_str(),
            changed,
            report: &report,
            formatted: emit_text.then_some(formatted.as_str()),
            diff: diff.as_deref(),
        };
        write_result(&args, &formatted, changed)?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if let Some(ref diff) = diff {
        if diff.is_empty() {
            eprintln!("{} {}", "unchanged".dimmed(), args.file);
        } else {
            super::diff::print_colored_diff(diff);
        }
    } else if args.write || args.output.is_some() {
        write_result(&args, &formatted, changed)?;
        if changed {
            eprintln!("{} {}", "formatted".green(), args.file);
        } else {
            eprintln!("{} {}", "unchanged".dimmed(), args.file);
        }
    } else {
        print!("{formatted}");
    }

    if args.report {
        print_report(&report);
    }

    Ok(())
}

/// Write the formatted text in place or to `--output`, skipping the
/// in-place write when nothing changed.
fn write_result(args: &FormatArgs, formatted: &str, changed: bool) -> anyhow::Result<()> {
    if args.write {
        if changed {
            std::fs::write(args.file.as_std_path(), formatted)
                .with_context(|| format!("failed to write {}", args.file))?;
        }
    } else if let Some(ref output) = args.output {
        std::fs::write(output.as_std_path(), formatted)
            .with_context(|| format!("failed to write {output}"))?;
    }
    Ok(())
}

fn print_report(report: &TransformReport) {
    if !report.any_changed() {
        eprintln!("{}", "no rules changed the text".dimmed());
        return;
    }
    eprintln!("{}", "Rules that changed the text:".bold());
    for rule in report.changed_rules() {
        eprintln!("  {} {}", "✓".green(), rule);
    }
}
