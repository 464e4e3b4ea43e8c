//! Validity checks for candidate assignments.

use std::collections::{BTreeMap, BTreeSet};

use santa_core::{Assignment, ParticipantId, Roster, Violation};

use super::ForbiddenPairSet;

/// Returns `true` if `candidate` satisfies every rule.
pub fn is_valid(candidate: &Assignment, roster: &Roster, forbidden: &ForbiddenPairSet) -> bool {
    validate(candidate, roster, forbidden).is_empty()
}

/// Returns every rule `candidate` breaks, naming the offending participants.
///
/// Checks, in order: per-pair rules (unknown giver or receiver, self-assignment,
/// repeat pair), then bijection over the active roster (duplicate givers,
/// missing givers, duplicate receivers, missing receivers). A duplicate giver
/// is checked against its first receiver only. An empty result means valid.
///
/// # Example
///
/// ```
/// use santa_core::{Assignment, History, HistoryWindow, Participant, ParticipantId, Roster, Violation};
/// use santa_engine::{validate, ForbiddenPairSet};
///
/// let roster = Roster::new(vec![
///     Participant::new(1, "Ann"),
///     Participant::new(2, "Ben"),
///     Participant::new(3, "Cat"),
/// ]).unwrap();
/// let forbidden = ForbiddenPairSet::build(&roster, &History::new(), 2026, &HistoryWindow::default()).unwrap();
///
/// let edit = Assignment::from_pairs([(1, 1), (2, 3), (3, 2)]);
/// let violations = validate(&edit, &roster, &forbidden);
/// assert!(violations.contains(&Violation::SelfAssignment(ParticipantId(1))));
/// ```
pub fn validate(
    candidate: &Assignment,
    roster: &Roster,
    forbidden: &ForbiddenPairSet,
) -> Vec<Violation> {
    let active: BTreeSet<ParticipantId> = roster.active_ids().into_iter().collect();
    let mut violations = Vec::new();
    let mut givers_of: BTreeMap<ParticipantId, Vec<ParticipantId>> = BTreeMap::new();

    for (giver, receiver) in candidate.pairs() {
        if !active.contains(&giver) {
            violations.push(Violation::UnknownGiver(giver));
            continue;
        }
        if !active.contains(&receiver) {
            violations.push(Violation::UnknownReceiver { giver, receiver });
            continue;
        }

        givers_of.entry(receiver).or_default().push(giver);

        if giver == receiver {
            violations.push(Violation::SelfAssignment(giver));
        } else if forbidden.forbids(giver, receiver) {
            violations.push(Violation::RepeatPair { giver, receiver });
        }
    }

    violations.extend(
        candidate
            .duplicate_givers()
            .into_iter()
            .map(|(giver, receivers)| Violation::DuplicateGiver { giver, receivers }),
    );

    for &id in &active {
        if candidate.receiver_of(id).is_none() {
            violations.push(Violation::MissingGiver(id));
        }
    }

    for &id in &active {
        match givers_of.get(&id) {
            None => violations.push(Violation::MissingReceiver(id)),
            Some(givers) if givers.len() > 1 => violations.push(Violation::DuplicateReceiver {
                receiver: id,
                givers: givers.clone(),
            }),
            Some(_) => {}
        }
    }

    violations
}
