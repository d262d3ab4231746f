//! Deprecation example using the function API.
//!
//! A deprecated code path is hit many times, but its warning is only
//! printed once per source.

use tracing_once::{global, log_deprecation_warning_once, warn_once, LogSource};

struct IndexResolver;
struct MappingContext;

fn resolve_indexes() {
    log_deprecation_warning_once(LogSource::of::<IndexResolver>());
}

fn create_mapping(name: &str) {
    warn_once(
        LogSource::of::<MappingContext>(),
        "Automatic index creation is deprecated; create indexes explicitly",
    );
    println!("  created mapping {}", name);
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    println!("=== Deprecation Warning Example ===\n");

    println!("Resolving indexes 5 times:");
    for _ in 0..5 {
        resolve_indexes();
    }

    println!("\nCreating 3 mappings:");
    for name in ["users", "orders", "events"] {
        create_mapping(name);
    }

    let metrics = global().metrics().snapshot();
    println!("\n=== Metrics ===");
    println!("Warnings emitted: {}", metrics.warnings_emitted);
    println!("Duplicates suppressed: {}", metrics.duplicates_suppressed);
    println!("Suppression rate: {:.1}%", metrics.suppression_rate() * 100.0);
}
