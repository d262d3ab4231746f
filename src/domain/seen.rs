//! Per-source record of messages that have already been warned.

use ahash::AHashSet;

/// Set of messages already emitted for one log source.
///
/// Order is irrelevant. Messages are only ever added; there is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenMessages {
    messages: AHashSet<Box<str>>,
}

impl SeenMessages {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message.
    ///
    /// Returns `true` if the message was not present before this call.
    /// Messages that are already present are not copied.
    pub fn insert(&mut self, message: &str) -> bool {
        if self.messages.contains(message) {
            return false;
        }
        self.messages.insert(Box::from(message))
    }

    /// Check whether a message has been recorded.
    pub fn contains(&self, message: &str) -> bool {
        self.messages.contains(message)
    }

    /// Number of distinct messages recorded.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if no message has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over recorded messages in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|m| m.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_insert_wins() {
        let mut seen = SeenMessages::new();
        assert!(seen.insert("Deprecated feature X"));
        assert!(!seen.insert("Deprecated feature X"));
        assert!(!seen.insert("Deprecated feature X"));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_distinct_messages() {
        let mut seen = SeenMessages::new();
        assert!(seen.insert("Deprecated feature X"));
        assert!(seen.insert("Deprecated feature Y"));
        assert_eq!(seen.len(), 2);
        assert!(seen.contains("Deprecated feature X"));
        assert!(seen.contains("Deprecated feature Y"));
        assert!(!seen.contains("Deprecated feature Z"));
    }

    #[test]
    fn test_empty_message_is_deduplicated() {
        let mut seen = SeenMessages::new();
        assert!(seen.insert(""));
        assert!(!seen.insert(""));
    }

    #[test]
    fn test_iter() {
        let mut seen = SeenMessages::new();
        assert!(seen.is_empty());
        seen.insert("a");
        seen.insert("b");

        let mut all: Vec<&str> = seen.iter().collect();
        all.sort_unstable();
        assert_eq!(all, vec!["a", "b"]);
    }
}
