//! Warn-once coordination logic.
//!
//! The logger ties the registry to a sink: it asks the sink whether warnings
//! are enabled, claims the (source, message) pair in the registry and
//! forwards the message only when the claim succeeds.

use crate::application::metrics::{Metrics, WarnOutcome};
use crate::application::ports::{LogSink, Storage};
use crate::application::registry::DedupRegistry;
use crate::domain::{message::DEPRECATION_WARNING, seen::SeenMessages, source::LogSource};
use crate::infrastructure::sink::TracingSink;
use crate::infrastructure::storage::ShardedStorage;

use std::sync::Arc;
use tracing::Level;

/// Builder for constructing a `OnceLogger`.
pub struct OnceLoggerBuilder {
    sink: Option<Arc<dyn LogSink>>,
    capacity: usize,
}

impl OnceLoggerBuilder {
    /// Set the sink warnings are forwarded to.
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Pre-allocate room for `capacity` distinct sources.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Build the logger.
    pub fn build(self) -> OnceLogger {
        let sink = self.sink.unwrap_or_else(|| Arc::new(TracingSink::new()));
        let storage = Arc::new(ShardedStorage::with_capacity(self.capacity));
        OnceLogger::with_storage(storage, sink)
    }
}

/// Emits each (source, message) warning at most once per process.
///
/// # Example
///
/// ```
/// use tracing_once::{LogSource, OnceLogger};
///
/// struct ExampleType;
///
/// let logger = OnceLogger::new();
/// let source = LogSource::of::<ExampleType>();
///
/// logger.warn_once(source, "Deprecated feature X"); // emitted (if WARN is enabled)
/// logger.warn_once(source, "Deprecated feature X"); // silent
/// ```
#[derive(Clone)]
pub struct OnceLogger<S = Arc<ShardedStorage<LogSource, SeenMessages>>>
where
    S: Storage<LogSource, SeenMessages> + Clone,
{
    registry: DedupRegistry<S>,
    sink: Arc<dyn LogSink>,
    metrics: Metrics,
}

impl<S> OnceLogger<S>
where
    S: Storage<LogSource, SeenMessages> + Clone,
{
    /// Warn about `message` on behalf of `source`, unless already warned.
    ///
    /// If the sink reports WARN disabled for `source`, returns without
    /// recording anything, so a later call made after enabling still emits.
    pub fn warn_once(&self, source: LogSource, message: &str) -> WarnOutcome {
        if !self.sink.is_enabled(&source, Level::WARN) {
            self.metrics.record(WarnOutcome::Disabled);
            return WarnOutcome::Disabled;
        }

        // The sink runs outside the storage lock
        if self.claim(source, message) {
            self.sink.emit(&source, Level::WARN, message);
            WarnOutcome::Emitted
        } else {
            WarnOutcome::Duplicate
        }
    }

    /// Warn once per source with [`DEPRECATION_WARNING`].
    pub fn log_deprecation_warning_once(&self, source: LogSource) -> WarnOutcome {
        self.warn_once(source, DEPRECATION_WARNING)
    }

    /// Record a pair without consulting the sink.
    ///
    /// Returns `true` if this call is the first to see the pair; the caller
    /// is then responsible for emitting it.
    pub fn claim(&self, source: LogSource, message: &str) -> bool {
        let first = self.registry.try_record(source, message);
        self.metrics.record(if first {
            WarnOutcome::Emitted
        } else {
            WarnOutcome::Duplicate
        });
        first
    }

    /// Check whether a pair has already been emitted.
    pub fn has_warned(&self, source: &LogSource, message: &str) -> bool {
        self.registry.contains(source, message)
    }

    /// Record a request that was dropped because WARN was disabled.
    pub(crate) fn note_disabled(&self) {
        self.metrics.record(WarnOutcome::Disabled);
    }

    /// Get a reference to the underlying registry.
    pub fn registry(&self) -> &DedupRegistry<S> {
        &self.registry
    }

    /// Get a reference to the metrics.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Get a reference to the sink.
    pub fn sink(&self) -> &Arc<dyn LogSink> {
        &self.sink
    }
}

impl OnceLogger<Arc<ShardedStorage<LogSource, SeenMessages>>> {
    /// Create a builder for configuring the logger.
    ///
    /// Defaults:
    /// - Sink: `TracingSink`
    /// - Capacity: 0 (grows on demand)
    pub fn builder() -> OnceLoggerBuilder {
        OnceLoggerBuilder {
            sink: None,
            capacity: 0,
        }
    }

    /// Create a logger with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a logger with a custom storage backend.
    pub fn with_storage<ST>(storage: ST, sink: Arc<dyn LogSink>) -> OnceLogger<ST>
    where
        ST: Storage<LogSource, SeenMessages> + Clone,
    {
        OnceLogger {
            registry: DedupRegistry::new(storage),
            sink,
            metrics: Metrics::new(),
        }
    }
}

impl Default for OnceLogger<Arc<ShardedStorage<LogSource, SeenMessages>>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for OnceLogger<S>
where
    S: Storage<LogSource, SeenMessages> + Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnceLogger")
            .field("registry", &self.registry)
            .field("sink", &self.sink)
            .field("metrics", &self.metrics.snapshot())
            .finish()
    }
}
