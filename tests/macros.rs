//! Integration tests for the call-site macros.
//!
//! Every test uses its own targets and messages: the macros share the
//! process-wide registry across all tests in this binary.

use tracing::Level;
use tracing_once::infrastructure::mocks::MockCaptureLayer;
use tracing_once::{global, warn_deprecated_once, warn_once, LogSource, DEPRECATION_WARNING};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

mod legacy {
    pub fn parse() {
        tracing_once::warn_once!("legacy parser in use");
    }

    pub fn entry_point() {
        tracing_once::warn_deprecated_once!();
    }
}

#[test]
fn test_module_path_is_source() {
    let capture = MockCaptureLayer::new();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    tracing::subscriber::with_default(subscriber, || {
        for _ in 0..10 {
            legacy::parse();
        }
    });

    let events = capture.get_captured();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::WARN);
    assert_eq!(events[0].target, "macros::legacy");
    assert!(global().has_warned(&LogSource::new("macros::legacy"), "legacy parser in use"));
}

#[test]
fn test_deprecated_once_per_module() {
    let capture = MockCaptureLayer::new();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    tracing::subscriber::with_default(subscriber, || {
        legacy::entry_point();
        legacy::entry_point();
        warn_deprecated_once!(target: "macros::deprecated::other");
        warn_deprecated_once!(target: "macros::deprecated::other");
    });

    assert_eq!(capture.count_message(DEPRECATION_WARNING), 2);
}

#[test]
fn test_env_filter_silences_one_target() {
    let capture = MockCaptureLayer::new();
    let filter = EnvFilter::new("warn,macros::filtered::muted=error");
    let subscriber = tracing_subscriber::registry().with(capture.clone().with_filter(filter));

    tracing::subscriber::with_default(subscriber, || {
        for _ in 0..3 {
            warn_once!(target: "macros::filtered::muted", "muted warning");
            warn_once!(target: "macros::filtered::open", "open warning");
        }
    });

    assert_eq!(capture.count_message("muted warning"), 0);
    assert_eq!(capture.count_message("open warning"), 1);

    // The muted target recorded nothing
    assert!(!global().has_warned(&LogSource::new("macros::filtered::muted"), "muted warning"));
    assert!(global().has_warned(&LogSource::new("macros::filtered::open"), "open warning"));
}

#[test]
fn test_formatted_messages() {
    let capture = MockCaptureLayer::new();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    tracing::subscriber::with_default(subscriber, || {
        for shard in [1, 2, 3, 1, 2, 3] {
            warn_once!(target: "macros::formatted", "shard {} uses a deprecated codec", shard);
        }
    });

    assert_eq!(capture.count(), 3);
    assert_eq!(capture.count_message("shard 2 uses a deprecated codec"), 1);
}

#[test]
fn test_macro_and_function_share_registry() {
    let capture = MockCaptureLayer::new();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let source = LogSource::new("macros::shared");

    tracing::subscriber::with_default(subscriber, || {
        warn_once!(target: "macros::shared", "said once");
        // Already claimed by the macro, so the function path stays silent
        tracing_once::warn_once(source, "said once");
    });

    assert_eq!(capture.count_message("said once"), 1);
}
