//! Search-level scope.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::stats::SearchStats;

/// Mutable state of one generator invocation.
///
/// Owns the random number generator, so a fixed seed makes the whole search
/// reproducible. Nothing here outlives the invocation.
pub struct SearchScope {
    rng: StdRng,
    start_time: Option<Instant>,
    stats: SearchStats,
}

impl SearchScope {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            start_time: None,
            stats: SearchStats::default(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            start_time: None,
            stats: SearchStats::default(),
        }
    }

    /// Seeded when `seed` is given, otherwise seeded from the OS.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    pub fn start_search(&mut self) {
        self.start_time = Some(Instant::now());
        self.stats = SearchStats::default();
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn restart_count(&self) -> u64 {
        self.stats.restarts
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Consumes the scope, stamping the elapsed time onto the statistics.
    pub fn finish(self) -> SearchStats {
        let mut stats = self.stats;
        stats.elapsed = self.start_time.map(|t| t.elapsed()).unwrap_or_default();
        stats
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SearchScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchScope")
            .field("start_time", &self.start_time)
            .field("stats", &self.stats)
            .finish()
    }
}
