//! Mock sink for testing.

use crate::application::ports::LogSink;
use crate::domain::source::LogSource;
use ahash::AHashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::Level;

/// A message received by [`MockSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct EmittedMessage {
    pub source: LogSource,
    pub level: Level,
    pub message: String,
}

/// Mock sink recording every emitted message.
///
/// The sink can be switched off as a whole or for individual sources, which
/// makes `is_enabled` report `false`.
///
/// # Examples
///
/// ```
/// use tracing_once::infrastructure::mocks::MockSink;
/// use tracing_once::{LogSource, OnceLogger};
/// use std::sync::Arc;
///
/// let sink = MockSink::new();
/// let logger = OnceLogger::builder().with_sink(Arc::new(sink.clone())).build();
///
/// logger.warn_once(LogSource::new("demo"), "hello");
/// logger.warn_once(LogSource::new("demo"), "hello");
/// assert_eq!(sink.count(), 1);
/// ```
///
/// # Thread Safety
///
/// `MockSink` is thread-safe and can be cloned to share across threads.
/// All clones share the same recorded messages and switches.
#[derive(Debug, Clone)]
pub struct MockSink {
    emitted: Arc<Mutex<Vec<EmittedMessage>>>,
    enabled: Arc<AtomicBool>,
    disabled_sources: Arc<Mutex<AHashSet<LogSource>>>,
}

impl MockSink {
    /// Create an enabled mock sink.
    pub fn new() -> Self {
        Self {
            emitted: Arc::new(Mutex::new(Vec::new())),
            enabled: Arc::new(AtomicBool::new(true)),
            disabled_sources: Arc::new(Mutex::new(AHashSet::new())),
        }
    }

    /// Enable or disable the sink for every source.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Enable or disable the sink for a single source.
    pub fn set_source_enabled(&self, source: LogSource, enabled: bool) {
        let mut disabled = self
            .disabled_sources
            .lock()
            .expect("MockSink mutex poisoned - a test thread panicked while holding the lock");
        if enabled {
            disabled.remove(&source);
        } else {
            disabled.insert(source);
        }
    }

    /// Get all emitted messages in emission order.
    pub fn emitted(&self) -> Vec<EmittedMessage> {
        self.emitted
            .lock()
            .expect("MockSink mutex poisoned - a test thread panicked while holding the lock")
            .clone()
    }

    /// Get the count of emitted messages.
    pub fn count(&self) -> usize {
        self.emitted
            .lock()
            .expect("MockSink mutex poisoned - a test thread panicked while holding the lock")
            .len()
    }

    /// Count how many times a (source, message) pair was emitted.
    pub fn count_for(&self, source: &LogSource, message: &str) -> usize {
        self.emitted
            .lock()
            .expect("MockSink mutex poisoned - a test thread panicked while holding the lock")
            .iter()
            .filter(|e| e.source == *source && e.message == message)
            .count()
    }
}

impl Default for MockSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for MockSink {
    fn is_enabled(&self, source: &LogSource, _level: Level) -> bool {
        self.enabled.load(Ordering::SeqCst)
            && !self
                .disabled_sources
                .lock()
                .expect("MockSink mutex poisoned - a test thread panicked while holding the lock")
                .contains(source)
    }

    fn emit(&self, source: &LogSource, level: Level, message: &str) {
        self.emitted
            .lock()
            .expect("MockSink mutex poisoned - a test thread panicked while holding the lock")
            .push(EmittedMessage {
                source: *source,
                level,
                message: message.to_string(),
            });
    }
}
