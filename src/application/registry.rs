//! Central registry of warnings that have already been emitted.
//!
//! The registry maps each log source to the set of messages already warned
//! for it. Entries are created lazily and only ever grow.

use crate::application::ports::Storage;
use crate::domain::{seen::SeenMessages, source::LogSource};

/// Registry deciding which (source, message) pairs are seen for the first time.
///
/// Uses the Storage port for concurrent access.
///
/// This type is generic over the storage implementation, allowing different
/// storage backends to be used. In production, use `Arc<ShardedStorage>`.
#[derive(Clone)]
pub struct DedupRegistry<S>
where
    S: Storage<LogSource, SeenMessages> + Clone,
{
    storage: S,
}

impl<S> DedupRegistry<S>
where
    S: Storage<LogSource, SeenMessages> + Clone,
{
    /// Create a new registry on top of a storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Record a (source, message) pair.
    ///
    /// Returns `true` for exactly one caller per pair, no matter how many
    /// threads race on it: the check and the insertion happen while the
    /// storage entry for `source` is locked.
    pub fn try_record(&self, source: LogSource, message: &str) -> bool {
        self.storage
            .with_entry_mut(source, SeenMessages::new, |seen| seen.insert(message))
    }

    /// Check whether a pair has already been recorded.
    pub fn contains(&self, source: &LogSource, message: &str) -> bool {
        self.storage
            .with_entry(source, |seen| seen.contains(message))
            .unwrap_or(false)
    }

    /// Get the number of sources with at least one recorded message.
    pub fn source_count(&self) -> usize {
        self.storage.len()
    }

    /// Get the number of recorded (source, message) pairs.
    pub fn message_count(&self) -> usize {
        let mut total = 0;
        self.storage.for_each(|_, seen| total += seen.len());
        total
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Iterate over all sources and their recorded messages.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&LogSource, &SeenMessages),
    {
        self.storage.for_each(f);
    }
}

impl<S> std::fmt::Debug for DedupRegistry<S>
where
    S: Storage<LogSource, SeenMessages> + Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DedupRegistry")
            .field("sources", &self.source_count())
            .finish()
    }
}
