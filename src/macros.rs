//! Call-site macros.
//!
//! The macros check and emit from the caller's own `tracing` call site, so
//! the subscriber sees the caller's target and per-target filters apply to
//! each source separately. Deduplication goes through the global logger.

/// Emit a `WARN` event at most once per (target, message) for the process.
///
/// The target defaults to the calling module and doubles as the log source.
/// The message is formatted with `format!` before deduplication, so two calls
/// that render the same text count as the same warning.
///
/// If the subscriber has `WARN` disabled for the target, the call records
/// nothing and a later call made while enabled still emits.
///
/// # Example
///
/// ```
/// use tracing_once::warn_once;
///
/// for _ in 0..3 {
///     warn_once!("legacy config format detected");                  // once
///     warn_once!(target: "myapp::config", "falling back to {}", "v1"); // once
/// }
/// ```
#[macro_export]
macro_rules! warn_once {
    (target: $target:expr, $($arg:tt)+) => {{
        if $crate::__macro_support::tracing::enabled!(
            target: $target,
            $crate::__macro_support::tracing::Level::WARN
        ) {
            let message = ::std::format!($($arg)+);
            if $crate::__macro_support::claim($crate::LogSource::new($target), &message) {
                $crate::__macro_support::tracing::warn!(target: $target, "{}", message);
            }
        } else {
            $crate::__macro_support::skip_disabled();
        }
    }};
    ($($arg:tt)+) => {
        $crate::warn_once!(target: ::std::module_path!(), $($arg)+)
    };
}

/// Emit [`DEPRECATION_WARNING`](crate::DEPRECATION_WARNING) at most once per target.
///
/// # Example
///
/// ```
/// fn old_entry_point() {
///     tracing_once::warn_deprecated_once!();
/// }
///
/// old_entry_point();
/// old_entry_point(); // silent
/// ```
#[macro_export]
macro_rules! warn_deprecated_once {
    (target: $target:expr) => {
        $crate::warn_once!(target: $target, "{}", $crate::DEPRECATION_WARNING)
    };
    () => {
        $crate::warn_deprecated_once!(target: ::std::module_path!())
    };
}

/// The [`LogSource`](crate::LogSource) of the enclosing module.
///
/// # Example
///
/// ```
/// let source = tracing_once::log_source!();
/// assert_eq!(source.name(), module_path!());
/// ```
#[macro_export]
macro_rules! log_source {
    () => {
        $crate::LogSource::new(::std::module_path!())
    };
}
