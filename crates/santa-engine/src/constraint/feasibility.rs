//! Cheap necessary-condition checks run before the search.

use std::fmt;

use santa_core::{Roster, Violation};

use super::{ConstraintMatrix, ForbiddenPairSet};

/// Outcome of the feasibility pre-check.
///
/// `Infeasible` is only reported when a necessary condition fails, so it is
/// never reported for a solvable instance. `Feasible` is not a proof: only
/// the search can establish that an assignment exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feasibility {
    /// No obvious obstruction.
    Feasible,
    /// Some participant has exactly one eligible partner.
    Marginal,
    /// No valid assignment can exist.
    Infeasible,
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feasibility::Feasible => write!(f, "feasible"),
            Feasibility::Marginal => write!(f, "marginal"),
            Feasibility::Infeasible => write!(f, "infeasible"),
        }
    }
}

/// Feasibility outcome with the obstructions that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeasibilityReport {
    pub feasibility: Feasibility,
    /// `NoEligibleReceiver` / `NoEligibleGiver` entries for an infeasible instance.
    pub violations: Vec<Violation>,
}

/// Classifies the active roster against the forbidden set.
pub fn feasibility_hint(roster: &Roster, forbidden: &ForbiddenPairSet) -> Feasibility {
    feasibility_report(roster, forbidden).feasibility
}

/// Detailed variant of [`feasibility_hint`].
///
/// # Example
///
/// ```
/// use santa_core::{HistoricalAssignment, History, HistoryWindow, Participant, Roster};
/// use santa_engine::{feasibility_hint, Feasibility, ForbiddenPairSet};
///
/// let roster = Roster::new(vec![Participant::new(1, "Ann"), Participant::new(2, "Ben")]).unwrap();
/// let history = History::from_rows(vec![HistoricalAssignment::new(2025, 1, 2)]);
/// let forbidden = ForbiddenPairSet::build(&roster, &history, 2026, &HistoryWindow::default()).unwrap();
///
/// assert_eq!(feasibility_hint(&roster, &forbidden), Feasibility::Infeasible);
/// ```
pub fn feasibility_report(roster: &Roster, forbidden: &ForbiddenPairSet) -> FeasibilityReport {
    let matrix = ConstraintMatrix::compile(roster.active_ids(), forbidden);
    report_for(&matrix)
}

pub(crate) fn report_for(matrix: &ConstraintMatrix) -> FeasibilityReport {
    let n = matrix.len();
    let mut violations = Vec::new();
    let mut marginal = false;

    if n < 2 {
        violations.extend(matrix.ids().iter().map(|&id| Violation::NoEligibleReceiver(id)));
        return FeasibilityReport {
            feasibility: Feasibility::Infeasible,
            violations,
        };
    }

    for i in 0..n {
        match matrix.receiver_options(i) {
            0 => violations.push(Violation::NoEligibleReceiver(matrix.id(i))),
            1 => marginal = true,
            _ => {}
        }
    }
    for i in 0..n {
        match matrix.giver_options(i) {
            0 => violations.push(Violation::NoEligibleGiver(matrix.id(i))),
            1 => marginal = true,
            _ => {}
        }
    }

    let feasibility = if !violations.is_empty() {
        Feasibility::Infeasible
    } else if marginal {
        Feasibility::Marginal
    } else {
        Feasibility::Feasible
    };

    FeasibilityReport {
        feasibility,
        violations,
    }
}
