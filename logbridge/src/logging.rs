//! Logging infrastructure for processes using the facade.
//!
//! Installs the `tracing` subscriber that [`TracingContext`] events end up in:
//! - Writes to `logs/logbridge.log` by default (cleared on session start)
//! - Optionally also prints to stdout for CLI tailing
//! - Multi-line pretty format for readability
//! - Filter from the RUST_LOG environment variable, else from config
//!
//! [`TracingContext`]: crate::log::TracingContext

use crate::config::LoggingConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log directory or file could not be prepared
    #[error("Failed to prepare log file: {0}")]
    Io(#[from] io::Error),

    /// Configured filter directive is malformed
    #[error("Invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed
    #[error("Logging already initialized")]
    AlreadyInitialized,
}

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize logging system.
///
/// Creates the log directory if needed, clears the previous log file,
/// and installs a global subscriber writing to the file and, if configured,
/// to stdout.
///
/// The log file is only truncated once the filter has parsed and no global
/// subscriber is installed yet, so a failed call leaves a running session's
/// log intact.
///
/// # Returns
///
/// LoggingGuard that must be kept alive for logging to work
///
/// # Errors
///
/// Returns an error if the log file cannot be prepared, the filter does not
/// parse, or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    if tracing::dispatcher::has_been_set() {
        return Err(LoggingError::AlreadyInitialized);
    }
    let env_filter = build_filter(config)?;
    prepare_log_file(&config.directory, &config.file)?;

    // Create file appender with non-blocking writer
    let file_appender = tracing_appender::rolling::never(&config.directory, &config.file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false) // No ANSI colors in file
        .pretty();

    let stdout_layer = config.stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
            .pretty()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Create `dir` if needed and truncate `file` inside it.
///
/// Handles both existing and non-existing files.
pub fn prepare_log_file(dir: &Path, file: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let log_path = dir.join(file);
    fs::write(&log_path, "")?;
    Ok(log_path)
}

/// Filter from RUST_LOG, falling back to the configured directive.
///
/// See [`select_filter`] for how the two are combined.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, ParseError> {
    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    select_filter(env_value.as_deref(), &config.filter)
}

/// Pick the filter from an environment value or the configured directive.
///
/// An environment value that is unset, or set but unparseable, is dropped
/// without notice and `configured` is used instead. No subscriber exists yet
/// at this point, so there is nowhere to report the bad value to. Only a
/// malformed `configured` directive is an error.
pub fn select_filter(
    env_value: Option<&str>,
    configured: &str,
) -> Result<EnvFilter, ParseError> {
    if let Some(filter) = env_value.and_then(|v| EnvFilter::try_new(v).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(configured)
}

/// Get default log directory path.
pub fn default_log_dir() -> &'static str {
    crate::config::DEFAULT_LOG_DIR
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    crate::config::DEFAULT_LOG_FILE
}
