//! Process-wide logger.
//!
//! The global logger is created on first use and lives until the process
//! exits. A custom logger can be installed with [`set_global_logger`] before
//! anything touches the global instance.

use crate::application::logger::OnceLogger;
use crate::domain::source::LogSource;
use once_cell::sync::OnceCell;

static GLOBAL: OnceCell<OnceLogger> = OnceCell::new();

/// Error returned when installing the global logger fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetGlobalLoggerError {
    /// The global logger was already created, either by a previous call to
    /// `set_global_logger` or by a warning emitted through it
    AlreadyInitialized,
}

impl std::fmt::Display for SetGlobalLoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetGlobalLoggerError::AlreadyInitialized => {
                write!(f, "a global warn-once logger has already been initialized")
            }
        }
    }
}

impl std::error::Error for SetGlobalLoggerError {}

/// Get the process-wide logger, creating it with defaults on first use.
pub fn global() -> &'static OnceLogger {
    GLOBAL.get_or_init(OnceLogger::new)
}

/// Install `logger` as the process-wide logger.
///
/// # Errors
/// Returns `SetGlobalLoggerError::AlreadyInitialized` if the global logger
/// already exists. The rejected logger is dropped.
pub fn set_global_logger(logger: OnceLogger) -> Result<(), SetGlobalLoggerError> {
    GLOBAL
        .set(logger)
        .map_err(|_| SetGlobalLoggerError::AlreadyInitialized)
}

/// Warn about `message` on behalf of `source` through the global logger,
/// unless this pair has already been warned.
///
/// # Example
///
/// ```
/// use tracing_once::{warn_once, LogSource};
///
/// struct ExampleType;
///
/// warn_once(LogSource::of::<ExampleType>(), "Deprecated feature X"); // emitted
/// warn_once(LogSource::of::<ExampleType>(), "Deprecated feature X"); // silent
/// warn_once(LogSource::of::<ExampleType>(), "Deprecated feature Y"); // emitted
/// ```
pub fn warn_once(source: LogSource, message: &str) {
    global().warn_once(source, message);
}

/// Emit the fixed deprecation warning for `source` through the global
/// logger, once per source.
pub fn log_deprecation_warning_once(source: LogSource) {
    global().log_deprecation_warning_once(source);
}

/// Support functions for the `warn_once!` family of macros. Not public API.
#[doc(hidden)]
pub mod __macro_support {
    pub use tracing;

    use crate::domain::source::LogSource;

    pub fn claim(source: LogSource, message: &str) -> bool {
        super::global().claim(source, message)
    }

    pub fn skip_disabled() {
        super::global().note_disabled();
    }
}
