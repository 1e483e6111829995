//! Logging system configuration and initialization
//!
//! This module provides the logging setup with:
//! - Console output with an environment-overridable level filter
//! - Optional file logging next to the executable
//! - Startup rotation of the previous log file
//! - UTC timestamps

use anyhow::{anyhow, Result};
use chrono::Utc;
use lazy_static::lazy_static;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;
use tracing_appender::non_blocking;
use tracing_subscriber::{
    fmt::{self, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

// Re-export LoggingConfig from config module
pub use crate::infrastructure::config::LoggingConfig;

// Global guard to keep the log file writer alive
lazy_static! {
    static ref LOG_GUARDS: Mutex<Vec<tracing_appender::non_blocking::WorkerGuard>> =
        Mutex::new(Vec::new());
}

const LOG_FILE_NAME: &str = "review-scope.log";

/// UTC time formatter for log lines
struct UtcTimeFormatter;

impl FormatTime for UtcTimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"))
    }
}

/// Get the log directory relative to the executable location
pub fn get_log_directory() -> PathBuf {
    // Get the directory where the executable is located
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    exe_dir.join("logs")
}

/// Initialize the logging system with default configuration
pub fn init_logging() -> Result<()> {
    let config = LoggingConfig::default();
    init_logging_with_config(&config)
}

/// Rotate an existing log file by renaming it with a timestamp suffix
fn rotate_existing_log_file(log_dir: &PathBuf, log_file_name: &str) -> Result<()> {
    let log_file_path = log_dir.join(log_file_name);

    if log_file_path.exists() {
        let metadata = std::fs::metadata(&log_file_path)
            .map_err(|e| anyhow!("Failed to get log file metadata: {}", e))?;

        let file_time = metadata
            .created()
            .or_else(|_| metadata.modified())
            .unwrap_or_else(|_| std::time::SystemTime::now());

        let datetime: chrono::DateTime<Utc> = file_time.into();
        let file_stem = log_file_name.trim_end_matches(".log");
        let timestamped_name =
            format!("{}.{}.log", file_stem, datetime.format("%Y%m%dT%H%M%S"));
        let timestamped_path = log_dir.join(&timestamped_name);

        std::fs::rename(&log_file_path, &timestamped_path).map_err(|e| {
            anyhow!(
                "Failed to rotate log file {} to {}: {}",
                log_file_path.display(),
                timestamped_path.display(),
                e
            )
        })?;
    }

    Ok(())
}

/// Initialize the logging system with the given configuration
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console_layer = fmt::layer()
        .with_timer(UtcTimeFormatter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.file_logging {
        let log_dir = get_log_directory();
        std::fs::create_dir_all(&log_dir)
            .map_err(|e| anyhow!("Failed to create log directory: {}", e))?;
        rotate_existing_log_file(&log_dir, LOG_FILE_NAME)?;

        let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
        let (file_writer, guard) = non_blocking(file_appender);
        LOG_GUARDS
            .lock()
            .map_err(|_| anyhow!("Log guard mutex poisoned"))?
            .push(guard);

        let file_layer = fmt::layer()
            .with_timer(UtcTimeFormatter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(file_writer);

        Registry::default()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

        info!("Logging initialized (console + file: {:?})", log_dir.join(LOG_FILE_NAME));
    } else {
        Registry::default()
            .with(env_filter)
            .with(console_layer)
            .try_init()
            .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

        info!("Logging initialized (console only)");
    }

    Ok(())
}
