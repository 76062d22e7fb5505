//! No-operation facade implementation.

use crate::log::{Log, LogLevel, Message};
use std::error::Error;
use std::fmt::Display;

/// A facade that reports every level as disabled and discards all writes.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where logging overhead should be eliminated
/// - Silent operation modes
///
/// # Example
///
/// ```
/// use logbridge::log::{Log, NoOpLog};
/// use std::sync::Arc;
///
/// let log: Arc<dyn Log> = Arc::new(NoOpLog);
/// log.info("This message is discarded".into());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLog;

impl Log for NoOpLog {
    #[inline]
    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }

    #[inline]
    fn write(&self, _level: LogLevel, _message: Message<'_>) {}

    #[inline]
    fn write_with_error(
        &self,
        _level: LogLevel,
        _message: Message<'_>,
        _error: &(dyn Error + 'static),
    ) {
    }

    #[inline]
    fn write_format(&self, _level: LogLevel, _template: &str, _args: &[&dyn Display]) {}
}
