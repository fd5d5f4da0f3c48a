//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive sessions log to a file under
//! `${GOALGATHER_HOME}/logs`. One-shot CLI commands log to stderr.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_ENV: &str = "GOALGATHER_LOG";
pub const LOG_FILE_NAME: &str = "goalgather.log";

/// Builds the filter from `GOALGATHER_LOG`, falling back to `default_filter`
/// and then to `info` if either directive string is malformed.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a file logger in `dir`. Keep the returned guard alive until exit
/// so buffered lines are flushed.
pub fn init_file(dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install file logger")?;

    Ok(guard)
}

/// Installs a compact stderr logger for CLI subcommands.
pub fn init_stderr(default_filter: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .context("Failed to install stderr logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_default_filter_falls_back_to_info() {
        // Only meaningful when the env var is unset, which is the case under cargo test.
        if std::env::var_os(LOG_ENV).is_some() {
            return;
        }
        let filter = env_filter("not a [valid filter");
        assert_eq!(filter.to_string(), "info");
    }
}
