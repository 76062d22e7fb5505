//! Logging facade bridged onto `tracing`.
//!
//! Application code talks to the [`Log`] trait. [`LogAdapter`] implements it
//! by forwarding every call to a [`ContextLogger`] bound to one category, and
//! [`TracingContext`] is the `tracing`-backed context logger used in
//! production.
//!
//! # Architecture
//!
//! - `Log` trait: per-level predicates and writes (plain, with error, template)
//! - `LogAdapter`: checks the level, classifies the [`Message`], delegates
//! - `ContextLogger` trait: what a backend must provide
//! - `TracingContext`: backend over the `tracing` crate
//! - `NoOpLog`: silent facade for tests and benchmarks
//! - `LogFactory`: hands out one facade per category
//!
//! # Usage
//!
//! ```
//! use logbridge::log::{Log, LogAdapter, Message};
//! use logbridge::log_info;
//!
//! struct Checkout {
//!     log: LogAdapter,
//! }
//!
//! impl Checkout {
//!     fn new() -> Self {
//!         Self { log: LogAdapter::for_type::<Self>() }
//!     }
//!
//!     fn pay(&self, user: &str, cents: u64) {
//!         log_info!(self.log, "User {0} paid {1}", user, cents);
//!         if cents == 0 {
//!             self.log.warn("zero amount payment".into());
//!         }
//!         self.log.debug(Message::object(&cents));
//!     }
//! }
//!
//! Checkout::new().pay("alice", 1299);
//! ```
//!
//! A level that is disabled costs one predicate call: nothing is formatted,
//! rendered or allocated.

mod adapter;
mod context;
mod factory;
mod message;
mod noop;
#[cfg(test)]
pub(crate) mod testing;
mod tracing_adapter;
mod r#trait;

pub use adapter::LogAdapter;
pub use context::ContextLogger;
pub use factory::{LogFactory, NoOpLogFactory, TracingLogFactory};
pub use message::{short_type_name, FormatArgs, Message, UNKNOWN_ERROR_KIND};
pub use noop::NoOpLog;
pub use r#trait::{Log, LogLevel};
pub use tracing_adapter::{TracingContext, TARGET};
