//! Configuration for the logging backend.
//!
//! The facade itself takes no configuration. What is configurable is how the
//! process-wide `tracing` subscriber is installed by
//! [`init_logging`](crate::logging::init_logging): where the log file goes,
//! the default filter, and whether entries are echoed to stdout.
//!
//! Settings are read from the `[logging]` section of
//! `~/.logbridge/config.ini`; anything missing falls back to the defaults.
//!
//! # Example
//!
//! ```
//! use logbridge::config::LoggingConfig;
//!
//! let config = LoggingConfig::default()
//!     .with_filter("logbridge=debug,info")
//!     .with_stdout(false);
//! assert_eq!(config.file, "logbridge.log");
//! ```

mod defaults;
mod file;
mod parser;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigError, LoggingConfig};
