//! Logging setup using tracing

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV_VAR: &str = "CUSTOMER_EXPLORER_LOG";
const LOG_FILE_NAME: &str = "customer-explorer.log";

/// Initialize the logging subsystem.
///
/// Logs go to `<data_local_dir>/customer-explorer/logs/`, rotated daily.
/// The level is controlled by `CUSTOMER_EXPLORER_LOG`, e.g.
/// `CUSTOMER_EXPLORER_LOG=debug`.
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("customer_explorer=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::info!(log_dir = %log_dir.display(), "Customer Explorer starting");

    Ok(())
}

fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("customer-explorer").join("logs")
}
