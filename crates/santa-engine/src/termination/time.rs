//! Wall-clock budget for the restart loop.

use std::time::Duration;

use super::Termination;
use crate::scope::SearchScope;

/// Stops the search once `limit` has passed since the search started.
///
/// Never fires before [`SearchScope::start_search`].
///
/// ```
/// use std::time::Duration;
/// use santa_engine::termination::TimeTermination;
///
/// let budget = TimeTermination::new(Duration::from_secs(2));
/// assert_eq!(budget.limit(), Duration::from_secs(2));
/// ```
#[derive(Debug, Clone)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl Termination for TimeTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.elapsed().is_some_and(|spent| spent >= self.limit)
    }
}
