//! Logging/tracing bootstrap for the CLI.
//!
//! Console output goes to stderr (stdout is reserved for formatted text
//! and JSON results); an optional JSONL file layer captures everything at
//! debug level for later inspection.
//!
//! Resolution order for the log file location:
//! 1. `FASTFORMAT_LOG_PATH` — explicit file path
//! 2. `FASTFORMAT_LOG_DIR` or config `log_dir` — directory, daily-rotated file
//! 3. No file logging

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where log output should go.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (wins over `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated JSONL logs.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's `log_dir`
    /// as a fallback.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("FASTFORMAT_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("FASTFORMAT_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }
}

/// Build the console env filter from CLI verbosity flags.
///
/// `RUST_LOG` wins when set; otherwise `--quiet`/`-v` count adjusts the
/// config file's log level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global tracing subscriber.
///
/// Returns a guard that must stay alive for the duration of the program;
/// dropping it flushes the non-blocking file writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match file_appender(config) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already initialized: {e}"))?;

    Ok(guard)
}

/// Pick the file appender from the resolved config, if any.
fn file_appender(config: &ObservabilityConfig) -> Option<tracing_appender::rolling::RollingFileAppender> {
    if let Some(ref path) = config.log_path {
        let dir = path.parent()?.to_path_buf();
        let file_name = path.file_name()?.to_os_string();
        return Some(tracing_appender::rolling::never(dir, file_name));
    }
    config
        .log_dir
        .as_ref()
        .map(|dir| tracing_appender::rolling::daily(dir, "fastformat.jsonl"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        let filter = env_filter(true, 3, "info");
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn verbose_escalates() {
        assert_eq!(env_filter(false, 1, "info").to_string(), "debug");
        assert_eq!(env_filter(false, 2, "info").to_string(), "trace");
    }

    #[test]
    fn config_level_used_by_default() {
        assert_eq!(env_filter(false, 0, "warn").to_string(), "warn");
    }

    #[test]
    fn no_log_config_no_appender() {
        let config = ObservabilityConfig::default();
        assert!(file_appender(&config).is_none());
    }
}
