//! Permutation candidates over roster positions.

use rand::seq::SliceRandom;
use rand::Rng;

use santa_core::{Assignment, Violation};

use crate::constraint::ConstraintMatrix;

/// `receivers[g]` is the position of the receiver of the giver at position `g`.
///
/// Always a permutation of `0..n`, so bijection holds by construction and
/// only self-pairs and repeat pairs can be violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    receivers: Vec<usize>,
}

impl Candidate {
    /// A uniformly shuffled permutation of `0..n`.
    pub(crate) fn shuffled<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut receivers: Vec<usize> = (0..n).collect();
        receivers.shuffle(rng);
        Self { receivers }
    }

    pub(crate) fn from_receivers(receivers: Vec<usize>) -> Self {
        Self { receivers }
    }

    pub(crate) fn len(&self) -> usize {
        self.receivers.len()
    }

    pub(crate) fn receiver(&self, giver: usize) -> usize {
        self.receivers[giver]
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.receivers.swap(a, b);
    }

    pub(crate) fn is_violating(&self, giver: usize, matrix: &ConstraintMatrix) -> bool {
        !matrix.allowed(giver, self.receivers[giver])
    }

    pub(crate) fn first_violation(&self, matrix: &ConstraintMatrix) -> Option<usize> {
        (0..self.len()).find(|&g| self.is_violating(g, matrix))
    }

    pub(crate) fn violation_count(&self, matrix: &ConstraintMatrix) -> usize {
        (0..self.len())
            .filter(|&g| self.is_violating(g, matrix))
            .count()
    }

    /// Violations in participant terms, for diagnostics.
    pub(crate) fn violations(&self, matrix: &ConstraintMatrix) -> Vec<Violation> {
        (0..self.len())
            .filter(|&g| self.is_violating(g, matrix))
            .map(|g| {
                let giver = matrix.id(g);
                let receiver = matrix.id(self.receivers[g]);
                if giver == receiver {
                    Violation::SelfAssignment(giver)
                } else {
                    Violation::RepeatPair { giver, receiver }
                }
            })
            .collect()
    }

    pub(crate) fn to_assignment(&self, matrix: &ConstraintMatrix) -> Assignment {
        self.receivers
            .iter()
            .enumerate()
            .map(|(g, &r)| (matrix.id(g), matrix.id(r)))
            .collect()
    }
}
