//! Candidate and accepted assignments.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::history::HistoricalAssignment;
use crate::participant::ParticipantId;

/// A mapping from giver to receiver.
///
/// Construction does not enforce any rule: manual edits may be wrong and
/// are checked by the validator before they are accepted.
///
/// # Example
///
/// ```
/// use santa_core::{Assignment, ParticipantId};
///
/// let assignment = Assignment::from_pairs([(1, 2), (2, 3), (3, 1)]);
/// assert_eq!(assignment.receiver_of(ParticipantId(1)), Some(ParticipantId(2)));
/// assert_eq!(assignment.giver_of(ParticipantId(1)), Some(ParticipantId(3)));
/// assert_eq!(assignment.to_history(2026).len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    pairs: BTreeMap<ParticipantId, ParticipantId>,
    // Extra receivers for givers listed more than once, in listing order.
    repeated: Vec<(ParticipantId, ParticipantId)>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an assignment from `(giver, receiver)` pairs.
    ///
    /// A giver listed twice keeps its first receiver; the later ones are
    /// kept aside and reported by [`duplicate_givers`](Self::duplicate_givers).
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u64, u64)>) -> Self {
        pairs
            .into_iter()
            .map(|(g, r)| (ParticipantId(g), ParticipantId(r)))
            .collect()
    }

    /// Adds a listed pair. A giver that already has a receiver keeps it and
    /// the new receiver is recorded as a duplicate.
    pub fn push(&mut self, giver: ParticipantId, receiver: ParticipantId) {
        match self.pairs.entry(giver) {
            Entry::Vacant(slot) => {
                slot.insert(receiver);
            }
            Entry::Occupied(_) => self.repeated.push((giver, receiver)),
        }
    }

    /// Sets the receiver of `giver`, returning the previous one.
    ///
    /// Also forgets any duplicates recorded for `giver`.
    pub fn assign(&mut self, giver: ParticipantId, receiver: ParticipantId) -> Option<ParticipantId> {
        self.repeated.retain(|&(g, _)| g != giver);
        self.pairs.insert(giver, receiver)
    }

    /// Givers listed more than once, each with every receiver it was listed
    /// with: the kept one first, then the extras in listing order.
    pub fn duplicate_givers(&self) -> BTreeMap<ParticipantId, Vec<ParticipantId>> {
        let mut duplicates: BTreeMap<ParticipantId, Vec<ParticipantId>> = BTreeMap::new();
        for &(giver, receiver) in &self.repeated {
            duplicates
                .entry(giver)
                .or_insert_with(|| self.pairs.get(&giver).copied().into_iter().collect())
                .push(receiver);
        }
        duplicates
    }

    pub fn has_duplicate_givers(&self) -> bool {
        !self.repeated.is_empty()
    }

    pub fn receiver_of(&self, giver: ParticipantId) -> Option<ParticipantId> {
        self.pairs.get(&giver).copied()
    }

    /// Linear scan; assignments are small.
    pub fn giver_of(&self, receiver: ParticipantId) -> Option<ParticipantId> {
        self.pairs
            .iter()
            .find(|(_, &r)| r == receiver)
            .map(|(&g, _)| g)
    }

    /// `(giver, receiver)` pairs ordered by giver.
    pub fn pairs(&self) -> impl Iterator<Item = (ParticipantId, ParticipantId)> + '_ {
        self.pairs.iter().map(|(&g, &r)| (g, r))
    }

    pub fn givers(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.pairs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Rows to append to the history once this assignment is accepted.
    pub fn to_history(&self, round_year: i32) -> Vec<HistoricalAssignment> {
        self.pairs()
            .map(|(giver, receiver)| HistoricalAssignment {
                round_year,
                giver,
                receiver,
            })
            .collect()
    }
}

impl FromIterator<(ParticipantId, ParticipantId)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (ParticipantId, ParticipantId)>>(iter: I) -> Self {
        let mut assignment = Self::new();
        for (giver, receiver) in iter {
            assignment.push(giver, receiver);
        }
        assignment
    }
}
