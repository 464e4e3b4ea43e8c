//! Standalone validation of hand-edited assignments.
//!
//! Administrators editing a round's pairings submit a complete assignment;
//! it is checked against the same rules the generator obeys before anything
//! is persisted. Nothing is corrected: the edit is either accepted as-is or
//! rejected with every broken rule.

use santa_core::{Assignment, History, HistoryWindow, Result, Roster, SantaError};
use tracing::{debug, warn};

use crate::constraint::{validate, ForbiddenPairSet};

/// Validates `candidate` for a round in `round_year`.
///
/// # Errors
///
/// - `InvalidRoster` if the roster has no active participants
/// - `ValidationFailure` listing every violated rule and the offending
///   participants
///
/// # Example
///
/// ```
/// use santa_core::{Assignment, History, HistoryWindow, Participant, ParticipantId, Roster, SantaError, Violation};
/// use santa_engine::validate_assignment;
///
/// let roster = Roster::new(vec![
///     Participant::new(1, "Ann"),
///     Participant::new(2, "Ben"),
///     Participant::new(3, "Cat"),
/// ]).unwrap();
///
/// let edit = Assignment::from_pairs([(1, 1), (2, 3), (3, 2)]);
/// let err = validate_assignment(&edit, &roster, &History::new(), 2026, &HistoryWindow::default()).unwrap_err();
/// assert_eq!(err.violations()[0], Violation::SelfAssignment(ParticipantId(1)));
/// ```
pub fn validate_assignment(
    candidate: &Assignment,
    roster: &Roster,
    history: &History,
    round_year: i32,
    window: &HistoryWindow,
) -> Result<()> {
    let forbidden = ForbiddenPairSet::build(roster, history, round_year, window)?;
    let violations = validate(candidate, roster, &forbidden);

    if violations.is_empty() {
        debug!(event = "edit_accepted", round_year, pairs = candidate.len());
        return Ok(());
    }

    warn!(
        event = "edit_rejected",
        round_year,
        violations = violations.len(),
        first = %violations[0],
    );
    Err(SantaError::ValidationFailure { violations })
}
