//! Facade trait and level definition.

use crate::log::Message;
use std::error::Error;
use std::fmt::{self, Display};

/// Severity of a log entry, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warning,
    /// Error messages
    Error,
    /// Failures the application cannot continue from
    Fatal,
}

impl LogLevel {
    /// All levels, least severe first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// The `tracing` level this maps onto.
    ///
    /// `tracing` has no fatal level, so `Fatal` shares `ERROR` and is told
    /// apart by the `fatal` field on the emitted event.
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Error | LogLevel::Fatal => tracing::Level::ERROR,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        };
        f.write_str(name)
    }
}

/// Logging facade used by application components.
///
/// Implementors provide four unconditional primitives. The per-level methods
/// are provided on top of them and check the level first, so a disabled level
/// never reaches [`Log::write`] and friends: nothing is formatted and nothing
/// is allocated.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
///
/// # Example
///
/// ```
/// use logbridge::log::{Log, Message, NoOpLog};
/// use std::sync::Arc;
///
/// let log: Arc<dyn Log> = Arc::new(NoOpLog);
/// log.info("Application started".into());
/// log.debug(Message::object(&42));
/// ```
pub trait Log: Send + Sync {
    /// Whether entries at `level` would currently be recorded.
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Write `message` at `level` without checking whether it is enabled.
    fn write(&self, level: LogLevel, message: Message<'_>);

    /// Write `message` at `level` with `error` attached, without checking
    /// whether the level is enabled.
    fn write_with_error(
        &self,
        level: LogLevel,
        message: Message<'_>,
        error: &(dyn Error + 'static),
    );

    /// Hand `template` and `args` to the backend at `level`, without checking
    /// whether the level is enabled.
    fn write_format(&self, level: LogLevel, template: &str, args: &[&dyn Display]);

    fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    fn is_info_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Warning)
    }

    fn is_error_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Fatal)
    }

    /// Log a debug message.
    fn debug(&self, message: Message<'_>) {
        if self.is_debug_enabled() {
            self.write(LogLevel::Debug, message);
        }
    }

    /// Log a debug message with an attached error.
    fn debug_with_error(&self, message: Message<'_>, error: &(dyn Error + 'static)) {
        if self.is_debug_enabled() {
            self.write_with_error(LogLevel::Debug, message, error);
        }
    }

    /// Log a debug template with substitution values.
    fn debug_format(&self, template: &str, args: &[&dyn Display]) {
        if self.is_debug_enabled() {
            self.write_format(LogLevel::Debug, template, args);
        }
    }

    /// Log an info message.
    fn info(&self, message: Message<'_>) {
        if self.is_info_enabled() {
            self.write(LogLevel::Info, message);
        }
    }

    /// Log an info message with an attached error.
    fn info_with_error(&self, message: Message<'_>, error: &(dyn Error + 'static)) {
        if self.is_info_enabled() {
            self.write_with_error(LogLevel::Info, message, error);
        }
    }

    /// Log an info template with substitution values.
    fn info_format(&self, template: &str, args: &[&dyn Display]) {
        if self.is_info_enabled() {
            self.write_format(LogLevel::Info, template, args);
        }
    }

    /// Log a warning message.
    fn warn(&self, message: Message<'_>) {
        if self.is_warn_enabled() {
            self.write(LogLevel::Warning, message);
        }
    }

    /// Log a warning message with an attached error.
    fn warn_with_error(&self, message: Message<'_>, error: &(dyn Error + 'static)) {
        if self.is_warn_enabled() {
            self.write_with_error(LogLevel::Warning, message, error);
        }
    }

    /// Log a warning template with substitution values.
    fn warn_format(&self, template: &str, args: &[&dyn Display]) {
        if self.is_warn_enabled() {
            self.write_format(LogLevel::Warning, template, args);
        }
    }

    /// Log an error message.
    fn error(&self, message: Message<'_>) {
        if self.is_error_enabled() {
            self.write(LogLevel::Error, message);
        }
    }

    /// Log an error message with an attached error.
    fn error_with_error(&self, message: Message<'_>, error: &(dyn Error + 'static)) {
        if self.is_error_enabled() {
            self.write_with_error(LogLevel::Error, message, error);
        }
    }

    /// Log an error template with substitution values.
    fn error_format(&self, template: &str, args: &[&dyn Display]) {
        if self.is_error_enabled() {
            self.write_format(LogLevel::Error, template, args);
        }
    }

    /// Log a fatal message.
    fn fatal(&self, message: Message<'_>) {
        if self.is_fatal_enabled() {
            self.write(LogLevel::Fatal, message);
        }
    }

    /// Log a fatal message with an attached error.
    fn fatal_with_error(&self, message: Message<'_>, error: &(dyn Error + 'static)) {
        if self.is_fatal_enabled() {
            self.write_with_error(LogLevel::Fatal, message, error);
        }
    }

    /// Log a fatal template with substitution values.
    fn fatal_format(&self, template: &str, args: &[&dyn Display]) {
        if self.is_fatal_enabled() {
            self.write_format(LogLevel::Fatal, template, args);
        }
    }
}

/// Template logging macros.
///
/// `log_info!(log, "User {0} logged in", user)` calls `info_format` with the
/// arguments gathered into a `&[&dyn Display]` slice. The template is not
/// interpolated here; the backend receives it verbatim.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug_format($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.info_format($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn_format($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.error_format($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal_format($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
