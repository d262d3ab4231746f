//! Outcome counters for warn-once requests.
//!
//! Every request ends in exactly one [`WarnOutcome`]. The logger reports the
//! outcome back to the caller and tallies it here.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// What happened to a single warn-once request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarnOutcome {
    /// First request for the pair; the warning went to the sink
    Emitted,
    /// The pair had already been emitted
    Duplicate,
    /// The sink had WARN disabled for the source; nothing was recorded
    Disabled,
}

impl WarnOutcome {
    const ALL: [WarnOutcome; 3] = [
        WarnOutcome::Emitted,
        WarnOutcome::Duplicate,
        WarnOutcome::Disabled,
    ];

    fn index(self) -> usize {
        match self {
            WarnOutcome::Emitted => 0,
            WarnOutcome::Duplicate => 1,
            WarnOutcome::Disabled => 2,
        }
    }

    /// Whether this request reached the sink.
    pub fn is_emitted(self) -> bool {
        self == WarnOutcome::Emitted
    }
}

impl fmt::Display for WarnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WarnOutcome::Emitted => "emitted",
            WarnOutcome::Duplicate => "duplicate",
            WarnOutcome::Disabled => "disabled",
        };
        f.write_str(name)
    }
}

/// Shared per-outcome counters. Clones count into the same tallies.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    counters: Arc<[AtomicU64; 3]>,
}

impl Metrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&self, outcome: WarnOutcome) {
        self.counters[outcome.index()].fetch_add(1, Ordering::Relaxed);
    }

    /// Number of requests that ended in `outcome`.
    pub fn count(&self, outcome: WarnOutcome) -> u64 {
        self.counters[outcome.index()].load(Ordering::Relaxed)
    }

    /// Number of warnings forwarded to the sink.
    pub fn warnings_emitted(&self) -> u64 {
        self.count(WarnOutcome::Emitted)
    }

    pub fn duplicates_suppressed(&self) -> u64 {
        self.count(WarnOutcome::Duplicate)
    }

    pub fn skipped_disabled(&self) -> u64 {
        self.count(WarnOutcome::Disabled)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            warnings_emitted: self.warnings_emitted(),
            duplicates_suppressed: self.duplicates_suppressed(),
            skipped_disabled: self.skipped_disabled(),
        }
    }

    /// Zero every counter.
    ///
    /// The registry is untouched: pairs already emitted stay emitted, so a
    /// reset never causes a warning to repeat.
    pub fn reset(&self) {
        for outcome in WarnOutcome::ALL {
            self.counters[outcome.index()].store(0, Ordering::Relaxed);
        }
    }
}

/// Counter values at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub warnings_emitted: u64,
    pub duplicates_suppressed: u64,
    pub skipped_disabled: u64,
}

impl MetricsSnapshot {
    /// Every request seen, whatever its outcome.
    pub fn total_requests(&self) -> u64 {
        self.warnings_emitted
            .saturating_add(self.duplicates_suppressed)
            .saturating_add(self.skipped_disabled)
    }

    /// Share of enabled requests that were duplicates, from 0.0 to 1.0.
    ///
    /// Disabled requests never reach the registry and are left out. Returns
    /// 0.0 when no enabled request has been seen.
    pub fn suppression_rate(&self) -> f64 {
        let enabled = self
            .warnings_emitted
            .saturating_add(self.duplicates_suppressed);
        if enabled == 0 {
            0.0
        } else {
            self.duplicates_suppressed as f64 / enabled as f64
        }
    }
}
