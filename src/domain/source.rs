//! Log source keys.
//!
//! A log source groups related warnings, in the same way a `tracing` target
//! groups related events. Warnings are deduplicated per source: the same
//! message coming from two sources is emitted once for each.

use std::fmt;

/// Opaque identifier for the logical origin of a warning.
///
/// A source wraps a `&'static str` name, usually a module path, a `tracing`
/// target or a type name. Equality and hashing depend only on that name, so
/// they are stable for the lifetime of the process.
///
/// # Example
/// ```
/// use tracing_once::LogSource;
///
/// struct ExampleType;
///
/// let by_type = LogSource::of::<ExampleType>();
/// let by_name = LogSource::new("myapp::storage");
///
/// assert!(by_type.name().ends_with("ExampleType"));
/// assert_eq!(by_name.name(), "myapp::storage");
/// assert_ne!(by_type, by_name);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogSource(&'static str);

impl LogSource {
    /// Create a source from a static name such as a target or module path.
    pub const fn new(name: &'static str) -> Self {
        LogSource(name)
    }

    /// Create a source identified by the type `T`.
    ///
    /// Uses [`std::any::type_name`], whose output is fixed for a given build.
    pub fn of<T: ?Sized>() -> Self {
        LogSource(std::any::type_name::<T>())
    }

    /// Get the name of this source.
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl From<&'static str> for LogSource {
    fn from(name: &'static str) -> Self {
        LogSource::new(name)
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
