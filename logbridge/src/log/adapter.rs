//! The facade-to-backend bridge.

use crate::log::{ContextLogger, FormatArgs, Log, LogLevel, Message, TracingContext};
use std::error::Error;
use std::fmt::{self, Display};
use std::sync::Arc;

/// [`Log`] implementation that forwards every call to a bound
/// [`ContextLogger`].
///
/// Create one per component that logs, scoped to that component's type or
/// category name. The adapter holds no state besides the context handle, so
/// it is cheap to clone and safe to share between threads.
///
/// Message handling for the single-argument writes:
///
/// - [`Message::Text`] is passed through as the message.
/// - [`Message::Error`] is written with its kind name as the message and the
///   error attached.
/// - [`Message::Object`] is written as its `Display` form.
///
/// The `*_with_error` writes always attach the given error. A text message
/// passes through and anything else, an error payload included, is written
/// as its `Display` form.
///
/// # Example
///
/// ```
/// use logbridge::log::{Log, LogAdapter};
///
/// struct InvoiceService {
///     log: LogAdapter,
/// }
///
/// impl InvoiceService {
///     fn new() -> Self {
///         Self { log: LogAdapter::for_type::<Self>() }
///     }
///
///     fn settle(&self, invoice_id: u64) {
///         self.log.info_format("Settling invoice {0}", &[&invoice_id]);
///     }
/// }
///
/// InvoiceService::new().settle(42);
/// ```
#[derive(Clone)]
pub struct LogAdapter {
    context: Arc<dyn ContextLogger>,
}

impl LogAdapter {
    /// Bind a `tracing` context scoped to `category`.
    pub fn new(category: impl Into<Arc<str>>) -> Self {
        Self::with_context(Arc::new(TracingContext::new(category)))
    }

    /// Bind a `tracing` context scoped to the type name of `T`.
    pub fn for_type<T: ?Sized>() -> Self {
        Self::with_context(Arc::new(TracingContext::for_type::<T>()))
    }

    /// Wrap an already bound context logger.
    pub fn with_context(context: Arc<dyn ContextLogger>) -> Self {
        Self { context }
    }

    pub fn category(&self) -> &str {
        self.context.category()
    }
}

impl fmt::Debug for LogAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogAdapter")
            .field("category", &self.category())
            .finish()
    }
}

impl Log for LogAdapter {
    fn is_enabled(&self, level: LogLevel) -> bool {
        self.context.is_enabled(level)
    }

    fn write(&self, level: LogLevel, message: Message<'_>) {
        match message {
            Message::Text(text) => self.context.write(level, text),
            Message::Error { error, kind } => self.context.write_error(level, error, kind),
            Message::Object(value) => self.context.write(level, &value.to_string()),
        }
    }

    fn write_with_error(
        &self,
        level: LogLevel,
        message: Message<'_>,
        error: &(dyn Error + 'static),
    ) {
        match message {
            Message::Text(text) => self.context.write_error(level, error, text),
            Message::Error { error: inner, .. } => {
                self.context.write_error(level, error, &inner.to_string())
            }
            Message::Object(value) => self.context.write_error(level, error, &value.to_string()),
        }
    }

    fn write_format(&self, level: LogLevel, template: &str, args: &[&dyn Display]) {
        self.context.write_template(level, template, FormatArgs::new(args));
    }
}
