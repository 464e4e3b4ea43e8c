//! Dense index-based view of the constraint model used by the search.

use santa_core::ParticipantId;

use super::ForbiddenPairSet;

/// Row-major `allowed[giver][receiver]` over positions in `ids`.
#[derive(Debug, Clone)]
pub(crate) struct ConstraintMatrix {
    ids: Vec<ParticipantId>,
    allowed: Vec<bool>,
}

impl ConstraintMatrix {
    pub(crate) fn compile(ids: Vec<ParticipantId>, forbidden: &ForbiddenPairSet) -> Self {
        let positions = ids.clone();
        Self::from_fn(ids, |g, r| !forbidden.forbids(positions[g], positions[r]))
    }

    /// Builds the matrix from a predicate over `(giver, receiver)` positions.
    pub(crate) fn from_fn(ids: Vec<ParticipantId>, allowed: impl Fn(usize, usize) -> bool) -> Self {
        let n = ids.len();
        let allowed = (0..n * n).map(|i| allowed(i / n, i % n)).collect();
        Self { ids, allowed }
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    pub(crate) fn id(&self, index: usize) -> ParticipantId {
        self.ids[index]
    }

    pub(crate) fn ids(&self) -> &[ParticipantId] {
        &self.ids
    }

    pub(crate) fn allowed(&self, giver: usize, receiver: usize) -> bool {
        self.allowed[giver * self.ids.len() + receiver]
    }

    pub(crate) fn receiver_options(&self, giver: usize) -> usize {
        (0..self.len()).filter(|&r| self.allowed(giver, r)).count()
    }

    pub(crate) fn giver_options(&self, receiver: usize) -> usize {
        (0..self.len()).filter(|&g| self.allowed(g, receiver)).count()
    }
}
