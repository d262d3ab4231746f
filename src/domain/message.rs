//! Fixed warning texts.

/// Text emitted by `log_deprecation_warning_once`.
pub const DEPRECATION_WARNING: &str = "This feature has been deprecated and is scheduled for removal.\n\
    \tTo silence this warning, migrate away from the deprecated API.\n\
    \tThe warning is emitted once per source for the lifetime of the process.";
