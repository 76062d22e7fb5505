//! Default values for the logging settings.

/// Directory log files are written to.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Log file name within [`DEFAULT_LOG_DIR`].
pub const DEFAULT_LOG_FILE: &str = "logbridge.log";

/// Filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Whether entries are echoed to stdout as well as the log file.
pub const DEFAULT_STDOUT: bool = true;

/// Level names accepted as a bare `level` value.
pub const LEVEL_NAMES: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];
