//! File-based tracing setup.
//!
//! Stdout carries command output, so logs go to
//! `~/.cache/running-indicator/running-indicator.log`. The filter comes from
//! `RUNNING_INDICATOR_LOG` (default `warn`).

use anyhow::{Result, anyhow};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "RUNNING_INDICATOR_LOG";
const LOG_FILE_NAME: &str = "running-indicator.log";

/// Directory holding the log file.
fn log_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    let dir = home.join(".cache").join("running-indicator");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the program so buffered lines are flushed.
pub fn init() -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(log_dir()?, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(guard)
}
