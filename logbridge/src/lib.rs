//! logbridge - a logging facade bridged onto `tracing`
//!
//! Components log through the [`log::Log`] trait: level predicates plus, for
//! each of debug/info/warn/error/fatal, a plain write, a write with an attached
//! error, and a template write. [`log::LogAdapter`] implements the facade on
//! top of a `tracing` context bound to the component's category.
//!
//! ```
//! use logbridge::log::{Log, LogAdapter};
//!
//! let log = LogAdapter::new("payments");
//! if log.is_debug_enabled() {
//!     log.debug("expensive diagnostics".into());
//! }
//! log.error_format("Charge {0} failed", &[&"ch_123"]);
//! ```
//!
//! Process setup lives in [`logging`] (subscriber installation) and
//! [`config`] (its settings).

pub mod config;
pub mod log;
pub mod logging;

/// Version of the logbridge library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
