//! Tests for the process-wide logger.
//!
//! Kept in a single test so the global instance is installed before any
//! other code in this binary can create the default one.

use std::sync::{Arc, Barrier};
use std::thread;
use tracing_once::infrastructure::mocks::MockSink;
use tracing_once::{
    global, log_deprecation_warning_once, set_global_logger, warn_once, LogSource, OnceLogger,
    SetGlobalLoggerError, DEPRECATION_WARNING,
};

struct ExampleType;

#[test]
fn test_global_logger_lifecycle() {
    let sink = MockSink::new();
    let logger = OnceLogger::builder()
        .with_sink(Arc::new(sink.clone()))
        .build();

    set_global_logger(logger).expect("global logger not yet initialized");

    // A second installation is rejected
    assert_eq!(
        set_global_logger(OnceLogger::new()),
        Err(SetGlobalLoggerError::AlreadyInitialized)
    );

    let source = LogSource::of::<ExampleType>();
    warn_once(source, "Deprecated feature X");
    warn_once(source, "Deprecated feature X");
    warn_once(source, "Deprecated feature Y");
    assert_eq!(sink.count(), 2);

    log_deprecation_warning_once(source);
    log_deprecation_warning_once(source);
    assert_eq!(sink.count_for(&source, DEPRECATION_WARNING), 1);

    // Concurrent callers through the free function
    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                warn_once(LogSource::new("global::race"), "once across threads");
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(sink.count_for(&LogSource::new("global::race"), "once across threads"), 1);

    // Disabled requests are not recorded in the global registry either
    sink.set_enabled(false);
    warn_once(source, "Deprecated feature Z");
    assert!(!global().has_warned(&source, "Deprecated feature Z"));
    sink.set_enabled(true);
    warn_once(source, "Deprecated feature Z");
    assert!(global().has_warned(&source, "Deprecated feature Z"));
    assert_eq!(sink.count(), 5);
}
