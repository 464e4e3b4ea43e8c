//! Local repair by receiver swaps.

use rand::seq::SliceRandom;
use tracing::trace;

use super::candidate::Candidate;
use crate::constraint::ConstraintMatrix;
use crate::scope::SearchScope;

/// Outcome of repairing one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RepairOutcome {
    /// The candidate now satisfies every constraint.
    Repaired,
    /// The pass budget ran out with violations left.
    Exhausted,
    /// A violating giver has no eligible receiver at all.
    Stuck,
}

/// Swaps receivers between givers until no violation is left or `max_passes`
/// passes are spent.
///
/// Each pass takes the first violating giver and scans the other givers in
/// random order for a swap that makes both pairs valid. When no such swap
/// exists it takes a swap that fixes the violating giver alone, moving the
/// conflict elsewhere so the next pass can try again.
pub(crate) fn repair(
    candidate: &mut Candidate,
    matrix: &ConstraintMatrix,
    max_passes: u64,
    scope: &mut SearchScope,
) -> RepairOutcome {
    let n = candidate.len();
    let mut others: Vec<usize> = Vec::with_capacity(n.saturating_sub(1));

    for _ in 0..max_passes {
        let Some(giver) = candidate.first_violation(matrix) else {
            return RepairOutcome::Repaired;
        };
        scope.stats_mut().record_repair_pass();

        let own = candidate.receiver(giver);
        others.clear();
        others.extend((0..n).filter(|&g| g != giver));
        others.shuffle(scope.rng());

        let both_valid = others.iter().copied().find(|&other| {
            matrix.allowed(giver, candidate.receiver(other)) && matrix.allowed(other, own)
        });
        let partner = both_valid.or_else(|| {
            others
                .iter()
                .copied()
                .find(|&other| matrix.allowed(giver, candidate.receiver(other)))
        });

        match partner {
            Some(other) => {
                trace!(
                    event = "swap",
                    giver,
                    other,
                    resolves_both = both_valid.is_some(),
                );
                candidate.swap(giver, other);
                scope.stats_mut().record_swap();
            }
            None => return RepairOutcome::Stuck,
        }
    }

    if candidate.first_violation(matrix).is_none() {
        RepairOutcome::Repaired
    } else {
        RepairOutcome::Exhausted
    }
}
