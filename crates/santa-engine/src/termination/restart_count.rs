//! Restart count termination.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates after a number of full restarts.
///
/// # Example
///
/// ```
/// use santa_engine::termination::RestartCountTermination;
///
/// // Give up after 100 fresh shuffles
/// let term = RestartCountTermination::new(100);
/// assert_eq!(term.limit(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct RestartCountTermination {
    limit: u64,
}

impl RestartCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for RestartCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.restart_count() >= self.limit
    }
}
