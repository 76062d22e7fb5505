//! Configuration file handling for ~/.logbridge/config.ini.

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::defaults::*;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

/// Settings for installing the `tracing` subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Directory holding the log file
    pub directory: PathBuf,
    /// Log file name, truncated at the start of each session
    pub file: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Echo entries to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_LOG_DIR),
            file: DEFAULT_LOG_FILE.to_string(),
            filter: DEFAULT_FILTER.to_string(),
            stdout: DEFAULT_STDOUT,
        }
    }
}

impl LoggingConfig {
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_stdout(mut self, stdout: bool) -> Self {
        self.stdout = stdout;
        self
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.directory.join(&self.file)
    }

    /// Load configuration from the default path (~/.logbridge/config.ini).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Build configuration from an already loaded INI document.
    ///
    /// Starts from defaults and overlays the `[logging]` section.
    pub fn parse(ini: &Ini) -> Result<Self, ConfigError> {
        super::parser::parse_ini(ini)
    }
}

/// Get the path to the config directory (~/.logbridge).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".logbridge")
}

/// Get the path to the config file (~/.logbridge/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
