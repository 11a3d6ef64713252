//! Diff command — preview formatting changes without writing anything.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use fastformat_core::config::Config;
use fastformat_core::{Preset, TransformReport, apply, unified_diff};

/// Arguments for the `diff` subcommand.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// File to compare (`-` reads stdin).
    pub file: Utf8PathBuf,

    /// Preset to start from (overrides config).
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Exit with status 1 when formatting would change the file.
    #[arg(long)]
    pub exit_code: bool,
}

#[derive(Serialize)]
struct DiffResult<'a> {
    file: &'a str,
    changed: bool,
    report: &'a TransformReport,
    diff: &'a str,
}

/// Show what formatting would change, as a unified diff.
#[instrument(name = "cmd_diff", skip_all, fields(file = %args.file))]
pub fn cmd_diff(
    args: DiffArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let options = config.resolve_options(args.preset);
    debug!(options = ?options, "resolved formatting options");

    let content = super::read_input(&args.file, max_input)?;
    let (formatted, report) = apply(&content, &options);
    let diff = unified_diff(&content, &formatted);
    let changed = !diff.is_empty();

    if global_json {
        let result = DiffResult {
            file: args.file.as_str(),
            changed,
            report: &report,
            diff: &diff,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if changed {
        print_colored_diff(&diff);
    } else {
        eprintln!("{} {}", "unchanged".dimmed(), args.file);
    }

    if args.exit_code && changed {
        std::process::exit(1);
    }
    Ok(())
}

/// Colorize diff lines: removals red, additions green, hunk headers cyan.
pub(crate) fn print_colored_diff(diff: &str) {
    for line in diff.lines() {
        if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
}
