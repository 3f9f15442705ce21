//! Logging setup.
//!
//! Everything goes through the `log` facade. [`init`] installs a `fern`
//! dispatch that feeds an in-memory [`Logger`] (shown in the log view) and,
//! when enabled, a log file under the platform data directory.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;

/// Lines kept in memory before the oldest are dropped
const MAX_BUFFERED_LINES: usize = 500;

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_BUFFERED_LINES {
                let excess = logs.len() - MAX_BUFFERED_LINES;
                logs.drain(..excess);
            }
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Path of the log file written when file logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|dir| dir.join("letsdoit").join("letsdoit.log"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory for log file"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the dispatch described by `config`, feeding `logger`.
pub fn build_dispatch(config: &LoggingConfig, logger: &Logger) -> Result<fern::Dispatch> {
    let sink = logger.clone();
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("{:<5} {}", record.level(), message)))
        .level(config.level_filter()?)
        .level_for("sqlx", log::LevelFilter::Warn)
        .level_for("sea_orm", log::LevelFilter::Warn)
        .chain(fern::Output::call(move |record| sink.log(record.args().to_string())));

    if config.enabled {
        let path = Logger::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, _| {
                    out.finish(format_args!("[{}] {}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"), message))
                })
                .chain(file),
        );
    }

    Ok(dispatch)
}

/// Install the global logger. May only succeed once per process.
pub fn init(config: &LoggingConfig) -> Result<Logger> {
    let logger = Logger::new();
    build_dispatch(config, &logger)?
        .apply()
        .context("Failed to install logger")?;
    Ok(logger)
}
