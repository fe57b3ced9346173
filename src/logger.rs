use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_BUFFER_CAPACITY, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared in-memory log buffer fed by the `log` facade.
///
/// The terminal owns stdout while the UI runs, so records go to this buffer
/// (shown in the demo's log pane) and, when enabled, to a log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(LOG_BUFFER_CAPACITY))),
        }
    }

    /// Add a log entry, dropping the oldest one when full
    pub fn log(&self, message: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == LOG_BUFFER_CAPACITY {
                logs.pop_front();
            }
            logs.push_back(message);
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

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Build the fern dispatch feeding this buffer and, if enabled, the log file
    pub fn dispatch(&self, config: &LoggingConfig) -> Result<fern::Dispatch> {
        let level = config.level_filter()?;
        let buffer = self.clone();

        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(fern::Output::call(move |record| buffer.log(record.args().to_string())));

        if config.enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }

        Ok(dispatch)
    }

    /// Path of the log file
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global logger and return its in-memory buffer
pub fn init(config: &LoggingConfig) -> Result<Logger> {
    let logger = Logger::new();
    logger
        .dispatch(config)?
        .apply()
        .context("Failed to install logger")?;
    Ok(logger)
}
