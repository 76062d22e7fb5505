//! The backend side of the bridge.

use crate::log::{FormatArgs, LogLevel};
use std::error::Error;

/// A backend logger bound to one category.
///
/// This is the surface [`LogAdapter`](crate::log::LogAdapter) writes
/// through. Every method acts unconditionally; level checks happen in the
/// facade before any of the `write*` methods are reached.
pub trait ContextLogger: Send + Sync {
    /// Category this logger was bound to.
    fn category(&self) -> &str;

    /// Whether the backend currently records entries at `level`.
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Write a literal message.
    fn write(&self, level: LogLevel, message: &str);

    /// Write a literal message with an attached error.
    fn write_error(&self, level: LogLevel, error: &(dyn Error + 'static), message: &str);

    /// Hand a template and its arguments to the backend unmodified.
    fn write_template(&self, level: LogLevel, template: &str, args: FormatArgs<'_>);
}
