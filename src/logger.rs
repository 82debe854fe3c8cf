use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME, MAX_LOG_ENTRIES};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
///
/// The newest [`MAX_LOG_ENTRIES`] entries are kept in memory for the logs
/// dialog. Every entry also goes to the `log` facade, which `fern` writes to
/// disk when file logging is enabled.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_path: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_path: None,
        }
    }

    /// Build a logger from the `[logging]` section of the config
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let mut logger = Self::new();

        if config.enabled {
            let path = match &config.file {
                Some(path) => path.clone(),
                None => Self::get_log_file_path()?,
            };
            Self::init_file_logging(&path, config.level_filter()?)?;
            logger.file_path = Some(path);
        }

        Ok(logger)
    }

    /// Install the global `fern` dispatcher writing to `path`
    fn init_file_logging(path: &Path, level: log::LevelFilter) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(file)
            .apply()
            .context("A global logger is already installed")?;

        Ok(())
    }

    /// Default log file location
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }

    /// Whether entries are also written to a file
    pub fn is_enabled(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        log::info!("{}", message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(format!("[{}] {}", timestamp, message));
            if logs.len() > MAX_LOG_ENTRIES {
                let excess = logs.len() - MAX_LOG_ENTRIES;
                logs.drain(..excess);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
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
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
