//! Facade factories.

use crate::log::{Log, LogAdapter, NoOpLog};
use std::sync::Arc;

/// Hands out one facade per category.
///
/// Install a factory once at startup and let components ask it for their
/// logger, instead of having every component know which backend is in use.
/// Factories keep no registry; each call binds a fresh logger.
pub trait LogFactory: Send + Sync {
    /// Logger scoped to `category`.
    fn get_logger(&self, category: &str) -> Arc<dyn Log>;

    /// Logger scoped to the type name of `T`.
    fn get_logger_for<T: ?Sized>(&self) -> Arc<dyn Log>
    where
        Self: Sized,
    {
        self.get_logger(std::any::type_name::<T>())
    }
}

/// Factory producing [`LogAdapter`]s over `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogFactory;

impl LogFactory for TracingLogFactory {
    fn get_logger(&self, category: &str) -> Arc<dyn Log> {
        Arc::new(LogAdapter::new(category))
    }
}

/// Factory producing [`NoOpLog`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogFactory;

impl LogFactory for NoOpLogFactory {
    fn get_logger(&self, _category: &str) -> Arc<dyn Log> {
        Arc::new(NoOpLog)
    }
}
