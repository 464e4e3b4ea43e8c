//! Search statistics.
//!
//! Plain counters recorded while the generator runs and returned with the
//! result, so callers can log or display how hard an assignment was to find.

use std::time::Duration;

/// Counters for a single generator invocation.
///
/// # Example
///
/// ```
/// use santa_engine::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.record_restart();
/// stats.record_candidate();
/// stats.record_repair_pass();
/// stats.record_swap();
///
/// assert_eq!(stats.restarts, 1);
/// assert_eq!(stats.swaps, 1);
/// assert!(!stats.fallback_used);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Full restarts (fresh shuffles) performed.
    pub restarts: u64,
    /// Candidates checked against the constraint model.
    pub candidates_evaluated: u64,
    /// Local repair passes across all restarts.
    pub repair_passes: u64,
    /// Receiver swaps applied during repair.
    pub swaps: u64,
    /// Whether the exact matching fallback produced the result.
    pub fallback_used: bool,
    /// Wall-clock time of the whole invocation.
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn record_restart(&mut self) {
        self.restarts += 1;
    }

    pub fn record_candidate(&mut self) {
        self.candidates_evaluated += 1;
    }

    pub fn record_repair_pass(&mut self) {
        self.repair_passes += 1;
    }

    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    /// Average repair passes per restart.
    pub fn passes_per_restart(&self) -> f64 {
        if self.restarts == 0 {
            0.0
        } else {
            self.repair_passes as f64 / self.restarts as f64
        }
    }
}
