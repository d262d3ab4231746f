//! Macro example with per-module filtering.
//!
//! Run with `RUST_LOG=warn,macros::storage=error` to silence the storage
//! module's warnings while keeping the others.

use tracing_once::{warn_deprecated_once, warn_once};
use tracing_subscriber::EnvFilter;

mod storage {
    pub fn open(path: &str) {
        tracing_once::warn_once!("storage format v1 is deprecated");
        println!("  opened {}", path);
    }
}

fn legacy_api() {
    warn_deprecated_once!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("=== Warn Once Macros Example ===\n");

    for path in ["a.db", "b.db", "c.db"] {
        storage::open(path);
    }

    for _ in 0..3 {
        legacy_api();
    }

    for retry in [1, 2, 1] {
        warn_once!("retry policy {} is deprecated", retry);
    }

    println!("\nNotice that:");
    println!("- Each warning appears once, however often its code path runs");
    println!("- Formatted messages are deduplicated by their rendered text");
    println!("- RUST_LOG can silence a single module's warnings");
}
