//! Tracing library adapter implementation.

use crate::log::{ContextLogger, FormatArgs, LogLevel};
use std::error::Error;
use std::sync::Arc;
use tracing::Level;

/// Target of every event emitted through [`TracingContext`].
///
/// `tracing` needs targets at compile time, so the bound category travels in
/// the `source_context` field instead. Filter on this target, e.g.
/// `RUST_LOG=logbridge=debug`.
pub const TARGET: &str = "logbridge";

// Fatal has no tracing level of its own; it is an ERROR event with `fatal = true`.
macro_rules! emit {
    ($level:expr, $($field:tt)+) => {
        match $level {
            LogLevel::Debug => tracing::debug!(target: TARGET, $($field)+),
            LogLevel::Info => tracing::info!(target: TARGET, $($field)+),
            LogLevel::Warning => tracing::warn!(target: TARGET, $($field)+),
            LogLevel::Error => tracing::error!(target: TARGET, $($field)+),
            LogLevel::Fatal => tracing::error!(target: TARGET, fatal = true, $($field)+),
        }
    };
}

/// Context logger that delegates to the `tracing` crate.
///
/// Holds the category it was bound to and stamps it on every event as
/// `source_context`. Whatever subscriber is installed decides filtering,
/// formatting and output.
///
/// # Example
///
/// ```ignore
/// use logbridge::log::{ContextLogger, LogLevel, TracingContext};
///
/// // Assumes a tracing subscriber is already initialized
/// let context = TracingContext::new("billing::invoices");
/// context.write(LogLevel::Info, "Using tracing backend");
/// ```
#[derive(Debug, Clone)]
pub struct TracingContext {
    category: Arc<str>,
}

impl TracingContext {
    /// Bind a context to `category`.
    pub fn new(category: impl Into<Arc<str>>) -> Self {
        Self {
            category: category.into(),
        }
    }

    /// Bind a context to the full type name of `T`.
    pub fn for_type<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>())
    }
}

impl ContextLogger for TracingContext {
    fn category(&self) -> &str {
        &self.category
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Debug => tracing::enabled!(target: TARGET, Level::DEBUG),
            LogLevel::Info => tracing::enabled!(target: TARGET, Level::INFO),
            LogLevel::Warning => tracing::enabled!(target: TARGET, Level::WARN),
            LogLevel::Error | LogLevel::Fatal => tracing::enabled!(target: TARGET, Level::ERROR),
        }
    }

    fn write(&self, level: LogLevel, message: &str) {
        emit!(level, source_context = %self.category, "{}", message);
    }

    fn write_error(&self, level: LogLevel, error: &(dyn Error + 'static), message: &str) {
        emit!(level, source_context = %self.category, error = error, "{}", message);
    }

    fn write_template(&self, level: LogLevel, template: &str, args: FormatArgs<'_>) {
        emit!(
            level,
            source_context = %self.category,
            template = template,
            args = ?args,
            "{}",
            template
        );
    }
}
