//! Ports (interfaces) for the application layer.
//!
//! In hexagonal architecture, ports define the interfaces that the application
//! layer needs. Infrastructure adapters implement these ports.

use crate::domain::source::LogSource;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::Level;

/// Port for the logging backend that actually displays warnings.
///
/// The application layer only asks two things of a sink: whether a severity
/// is enabled for a source, and to emit a message. Infrastructure provides
/// concrete implementations (TracingSink, MockSink).
pub trait LogSink: Send + Sync + Debug {
    /// Check whether `level` is enabled for `source`.
    fn is_enabled(&self, source: &LogSource, level: Level) -> bool;

    /// Emit a message for `source` at `level`.
    fn emit(&self, source: &LogSource, level: Level, message: &str);
}

/// Port for concurrent key-value storage.
///
/// This abstraction allows the application layer to store and retrieve values
/// without depending on specific concurrent data structure implementations.
/// Infrastructure provides concrete implementations (ShardedStorage).
pub trait Storage<K, V>: Send + Sync + Debug
where
    K: Hash + Eq + Clone + Send + Sync,
    V: Send + Sync,
{
    /// Access an entry with mutable access, creating it if necessary.
    ///
    /// Creation and the accessor call happen atomically with respect to other
    /// callers using the same key.
    ///
    /// # Arguments
    /// * `key` - The key to look up
    /// * `factory` - Function to create a new value if the key doesn't exist
    /// * `accessor` - Function that gets mutable access to the value
    ///
    /// # Returns
    /// The result from the accessor function
    fn with_entry_mut<F, R>(&self, key: K, factory: impl FnOnce() -> V, accessor: F) -> R
    where
        F: FnOnce(&mut V) -> R;

    /// Access an existing entry without creating it.
    ///
    /// Returns `None` if the key is absent.
    fn with_entry<F, R>(&self, key: &K, accessor: F) -> Option<R>
    where
        F: FnOnce(&V) -> R;

    /// Get the number of entries in the storage.
    fn len(&self) -> usize;

    /// Check if the storage is empty.
    fn is_empty(&self) -> bool;

    /// Iterate over all entries, providing access to both key and value.
    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&K, &V);
}
