//! Doctor command — diagnose configuration and environment.

use camino::Utf8Path;
use clap::Args;
use fastformat_core::config::{Config, ConfigSources, user_config_dir};
use fastformat_core::{Preset, apply};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;

/// Arguments for the `doctor` subcommand.
#[derive(Args, Debug, Default)]
pub struct DoctorArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "kebab-case")]
enum Status {
    Ok,
    Warn,
}

#[derive(Serialize)]
struct Check {
    name: &'static str,
    status: Status,
    detail: String,
}

impl Check {
    fn ok(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            status: Status::Ok,
            detail: detail.into(),
        }
    }

    fn warn(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            status: Status::Warn,
            detail: detail.into(),
        }
    }
}

/// Diagnose configuration discovery, logging setup, and the pipeline itself.
#[instrument(name = "cmd_doctor", skip_all)]
pub fn cmd_doctor(
    _args: DoctorArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
) -> anyhow::Result<()> {
    let checks = run_checks(config, sources, cwd);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&checks)?);
        return Ok(());
    }

    println!("{}", "fastformat doctor".bold());
    println!("{}: {}", "Working directory".dimmed(), cwd);
    println!();
    for check in &checks {
        let marker = match check.status {
            Status::Ok => "✓".green().to_string(),
            Status::Warn => "!".yellow().to_string(),
        };
        println!("  {marker} {:<16} {}", check.name, check.detail);
    }
    Ok(())
}

fn run_checks(config: &Config, sources: &ConfigSources, cwd: &Utf8Path) -> Vec<Check> {
    let mut checks = Vec::new();

    // Config discovery
    checks.push(match sources.primary_file() {
        Some(path) => Check::ok("config", format!("loaded from {path}")),
        None => Check::warn("config", format!("no config file found near {cwd}; using defaults")),
    });
    if let Some(ref user_file) = sources.user_file {
        checks.push(Check::ok("user config", user_file.to_string()));
    } else if let Some(dir) = user_config_dir() {
        checks.push(Check::warn(
            "user config",
            format!("none found (searched {dir})"),
        ));
    }
    for extra in &sources.project_files {
        if sources.primary_file() != Some(extra.as_path()) {
            checks.push(Check::warn(
                "shadowed config",
                format!("{extra} is shadowed by a closer config file"),
            ));
        }
    }

    // Effective preset
    let preset = config.preset.unwrap_or(Preset::Default);
    checks.push(Check::ok("preset", preset.as_str()));

    // Log directory writability
    if let Some(ref dir) = config.log_dir {
        if dir.is_dir() {
            checks.push(Check::ok("log dir", dir.to_string()));
        } else {
            checks.push(Check::warn("log dir", format!("{dir} does not exist")));
        }
    }

    // Environment overrides that silently change behavior
    for var in ["FASTFORMAT_PRESET", "FASTFORMAT_LOG_PATH", "FASTFORMAT_LOG_DIR", "RUST_LOG"] {
        if let Ok(value) = std::env::var(var) {
            checks.push(Check::ok("env", format!("{var}={value}")));
        }
    }

    // Pipeline self-test: one pass must be idempotent
    let options = config.resolve_options(None);
    let sample = "- \"So...  it's done,\" she said - finally. Pages 10-20.";
    let (once, _) = apply(sample, &options);
    let (twice, _) = apply(&once, &options);
    if once == twice {
        checks.push(Check::ok("pipeline", "idempotence self-test passed"));
    } else {
        checks.push(Check::warn("pipeline", "idempotence self-test FAILED"));
    }

    checks
}
