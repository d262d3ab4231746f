//! # tracing-once
//!
//! At-most-once warnings for the `tracing` ecosystem.
//!
//! Given a log source and a message, this crate emits the message at most once
//! per (source, message) pair for the lifetime of the process, no matter how
//! many threads ask for it. It is meant for deprecation notices and similar
//! fixed warnings that would otherwise flood the logs when hit in a loop.
//!
//! ## Quick Start
//!
//! ```rust
//! use tracing_once::{log_deprecation_warning_once, warn_once, LogSource};
//!
//! struct ExampleType;
//!
//! let source = LogSource::of::<ExampleType>();
//!
//! warn_once(source, "Deprecated feature X"); // emitted
//! warn_once(source, "Deprecated feature X"); // silent
//! warn_once(source, "Deprecated feature Y"); // emitted
//!
//! // Fixed deprecation text, once per source
//! log_deprecation_warning_once(source);
//! ```
//!
//! ## Macros
//!
//! The macros use the calling module as the source and emit from the caller's
//! call site, so subscriber filters such as `RUST_LOG=myapp::legacy=error`
//! silence one source without touching the others:
//!
//! ```rust
//! use tracing_once::{warn_deprecated_once, warn_once};
//!
//! fn legacy_entry_point(path: &str) {
//!     warn_deprecated_once!();
//!     warn_once!("reading {} with the legacy parser", path);
//! }
//! # legacy_entry_point("a.cfg");
//! ```
//!
//! ## Disabled Sinks
//!
//! When the sink reports `WARN` disabled for a source, the request returns
//! immediately and nothing is recorded. Disabled loggers therefore don't grow
//! the registry, and a warning requested while disabled is still emitted the
//! first time it is requested while enabled.
//!
//! ## Custom Loggers
//!
//! The free functions and macros share one process-wide [`OnceLogger`]. Build
//! your own to use a different sink, or to keep an isolated registry:
//!
//! ```rust
//! use tracing_once::{LogSource, OnceLogger, TracingSink};
//! use std::sync::Arc;
//!
//! let logger = OnceLogger::builder()
//!     .with_sink(Arc::new(TracingSink::new()))
//!     .with_capacity(16)
//!     .build();
//!
//! logger.warn_once(LogSource::new("myapp::index"), "automatic index creation is deprecated");
//!
//! let metrics = logger.metrics().snapshot();
//! println!("emitted: {}", metrics.warnings_emitted);
//! println!("suppressed: {}", metrics.duplicates_suppressed);
//! ```
//!
//! A custom logger can also replace the global one, provided nothing has used
//! the global instance yet:
//!
//! ```rust
//! use tracing_once::{set_global_logger, OnceLogger};
//!
//! if let Err(e) = set_global_logger(OnceLogger::new()) {
//!     eprintln!("{}", e);
//! }
//! ```
//!
//! ## Memory
//!
//! Every distinct (source, message) pair stays in memory until the process
//! exits. There is no eviction. Keep messages fixed: interpolating request
//! IDs or timestamps into a warn-once message defeats deduplication and grows
//! the registry without bound.

// Domain layer - pure business logic
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - external adapters
pub mod infrastructure;

mod global;
mod macros;

// Re-export commonly used types for convenience
pub use domain::{message::DEPRECATION_WARNING, seen::SeenMessages, source::LogSource};

pub use application::{
    logger::{OnceLogger, OnceLoggerBuilder},
    metrics::{Metrics, MetricsSnapshot, WarnOutcome},
    ports::{LogSink, Storage},
    registry::DedupRegistry,
};

pub use infrastructure::{
    sink::{TracingSink, SINK_TARGET},
    storage::ShardedStorage,
};

pub use global::{
    global, log_deprecation_warning_once, set_global_logger, warn_once, SetGlobalLoggerError,
};

#[doc(hidden)]
pub use global::__macro_support;
