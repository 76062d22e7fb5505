//! Recording context logger for unit tests.

use crate::log::{ContextLogger, FormatArgs, Log, LogLevel, Message};
use std::error::Error;
use std::fmt::Display;
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Mutex;

/// One call that reached the backend.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Recorded {
    Write {
        level: LogLevel,
        message: String,
        error: Option<AttachedError>,
    },
    Template {
        level: LogLevel,
        template: String,
        args: Vec<String>,
    },
}

/// Identity and rendering of an attached error.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AttachedError {
    pub addr: usize,
    pub display: String,
}

impl AttachedError {
    pub fn of(error: &(dyn Error + 'static)) -> Self {
        Self {
            addr: error as *const dyn Error as *const () as usize,
            display: error.to_string(),
        }
    }
}

/// Context logger that records every write and lets tests flip levels on
/// and off between calls.
#[derive(Debug, Default)]
pub(crate) struct RecordingContext {
    enabled: AtomicU8,
    enabled_checks: AtomicUsize,
    calls: Mutex<Vec<Recorded>>,
}

fn bit(level: LogLevel) -> u8 {
    1 << level as u8
}

impl RecordingContext {
    pub fn all_enabled() -> Self {
        let context = Self::default();
        for level in LogLevel::ALL {
            context.set_enabled(level, true);
        }
        context
    }

    pub fn set_enabled(&self, level: LogLevel, enabled: bool) {
        if enabled {
            self.enabled.fetch_or(bit(level), Ordering::SeqCst);
        } else {
            self.enabled.fetch_and(!bit(level), Ordering::SeqCst);
        }
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    pub fn enabled_checks(&self) -> usize {
        self.enabled_checks.load(Ordering::SeqCst)
    }

    fn record(&self, call: Recorded) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ContextLogger for RecordingContext {
    fn category(&self) -> &str {
        "recording"
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        self.enabled_checks.fetch_add(1, Ordering::SeqCst);
        self.enabled.load(Ordering::SeqCst) & bit(level) != 0
    }

    fn write(&self, level: LogLevel, message: &str) {
        self.record(Recorded::Write {
            level,
            message: message.to_string(),
            error: None,
        });
    }

    fn write_error(&self, level: LogLevel, error: &(dyn Error + 'static), message: &str) {
        self.record(Recorded::Write {
            level,
            message: message.to_string(),
            error: Some(AttachedError::of(error)),
        });
    }

    fn write_template(&self, level: LogLevel, template: &str, args: FormatArgs<'_>) {
        self.record(Recorded::Template {
            level,
            template: template.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        });
    }
}

/// Call the single-argument facade method for `level`.
pub(crate) fn log_plain(log: &dyn Log, level: LogLevel, message: Message<'_>) {
    match level {
        LogLevel::Debug => log.debug(message),
        LogLevel::Info => log.info(message),
        LogLevel::Warning => log.warn(message),
        LogLevel::Error => log.error(message),
        LogLevel::Fatal => log.fatal(message),
    }
}

/// Call the message-plus-error facade method for `level`.
pub(crate) fn log_with_error(
    log: &dyn Log,
    level: LogLevel,
    message: Message<'_>,
    error: &(dyn Error + 'static),
) {
    match level {
        LogLevel::Debug => log.debug_with_error(message, error),
        LogLevel::Info => log.info_with_error(message, error),
        LogLevel::Warning => log.warn_with_error(message, error),
        LogLevel::Error => log.error_with_error(message, error),
        LogLevel::Fatal => log.fatal_with_error(message, error),
    }
}

/// Call the template facade method for `level`.
pub(crate) fn log_format(log: &dyn Log, level: LogLevel, template: &str, args: &[&dyn Display]) {
    match level {
        LogLevel::Debug => log.debug_format(template, args),
        LogLevel::Info => log.info_format(template, args),
        LogLevel::Warning => log.warn_format(template, args),
        LogLevel::Error => log.error_format(template, args),
        LogLevel::Fatal => log.fatal_format(template, args),
    }
}

/// Call the predicate for `level`.
pub(crate) fn level_enabled(log: &dyn Log, level: LogLevel) -> bool {
    match level {
        LogLevel::Debug => log.is_debug_enabled(),
        LogLevel::Info => log.is_info_enabled(),
        LogLevel::Warning => log.is_warn_enabled(),
        LogLevel::Error => log.is_error_enabled(),
        LogLevel::Fatal => log.is_fatal_enabled(),
    }
}
