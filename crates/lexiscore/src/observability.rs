//! Logging and tracing initialization.
//!
//! Logs are written as JSONL to a file; stdout stays reserved for command
//! output. The log location is resolved from, highest precedence first:
//! `LEXISCORE_LOG_PATH`, `LEXISCORE_LOG_DIR`, the configured `log_dir`, and
//! finally the platform data-local directory.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Resolved logging destinations.
#[derive(Debug)]
pub struct ObservabilityConfig {
    /// Explicit log file path (wins over `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated JSONL log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve logging destinations from environment variables, falling back
    /// to the configured directory and then the platform default.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("LEXISCORE_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("LEXISCORE_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(default_log_dir);
        Self { log_path, log_dir }
    }
}

fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "lexiscore")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Build the log filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces errors only and
/// each `-v` steps the level up (debug, then trace).
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global tracing subscriber with a JSONL file writer.
///
/// Returns the appender guard; drop it only at process exit so buffered
/// log lines get flushed. Returns `Ok(None)` when no log destination could
/// be resolved; the CLI still works, it just doesn't log.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let appender = if let Some(ref path) = config.log_path {
        let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let file_name = path.file_name().context("log path has no file name")?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        rolling::never(dir, file_name)
    } else if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        rolling::daily(dir, "lexiscore.jsonl")
    } else {
        return Ok(None);
    };

    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(writer))
        .try_init()
        .context("failed to set global tracing subscriber")?;

    Ok(Some(guard))
}
