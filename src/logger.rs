//! File logging for todolist
//!
//! The terminal is owned by the TUI while the app runs, so log records are
//! only ever written to a file. When logging is disabled no logger is
//! installed and the `log` macros compile down to no-ops.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Format a single log line
pub fn format_line(timestamp: &str, level: log::Level, target: &str, message: &std::fmt::Arguments) -> String {
    format!("[{} {} {}] {}", timestamp, level, target, message)
}

/// Get the path of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build the fern dispatch writing to `path` at `level`
pub fn build_dispatch(level: log::LevelFilter, path: &Path) -> Result<fern::Dispatch> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
            out.finish(format_args!(
                "{}",
                format_line(&timestamp, record.level(), record.target(), message)
            ))
        })
        .level(level)
        .chain(file))
}

/// Install the global logger from configuration.
///
/// Returns the log file path when logging was enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    build_dispatch(config.level_filter()?, &path)?
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}
