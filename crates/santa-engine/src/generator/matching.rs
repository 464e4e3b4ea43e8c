//! Exact fallback: perfect matching over eligible pairs.
//!
//! A valid assignment is exactly a perfect matching in the bipartite graph
//! of givers and receivers joined by allowed pairs, so augmenting paths
//! either find one or prove none exists.

use super::candidate::Candidate;
use crate::constraint::ConstraintMatrix;

/// Finds a valid candidate, or `None` if the instance is infeasible.
///
/// Deterministic: givers and receivers are tried in roster order.
pub(crate) fn perfect_matching(matrix: &ConstraintMatrix) -> Option<Candidate> {
    let n = matrix.len();
    let mut owner: Vec<Option<usize>> = vec![None; n];

    for giver in 0..n {
        let mut visited = vec![false; n];
        if !augment(giver, matrix, &mut visited, &mut owner) {
            return None;
        }
    }

    let mut receivers = vec![0; n];
    for (receiver, giver) in owner.iter().enumerate() {
        receivers[(*giver)?] = receiver;
    }
    Some(Candidate::from_receivers(receivers))
}

/// Looks for an augmenting path from `root`, flipping it into `owner` when found.
///
/// Iterative so long alternating paths on large rosters stay off the call stack.
fn augment(
    root: usize,
    matrix: &ConstraintMatrix,
    visited: &mut [bool],
    owner: &mut [Option<usize>],
) -> bool {
    let n = matrix.len();
    // (giver, next receiver to try) per level; `path[i]` is the receiver taken at level `i`.
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
    let mut path: Vec<usize> = Vec::new();

    while let Some(top) = stack.last_mut() {
        let (giver, start) = *top;
        let next = (start..n).find(|&r| matrix.allowed(giver, r) && !visited[r]);
        let Some(receiver) = next else {
            stack.pop();
            path.pop();
            continue;
        };
        top.1 = receiver + 1;
        visited[receiver] = true;
        path.push(receiver);

        match owner[receiver] {
            Some(current) => stack.push((current, 0)),
            None => {
                for (&(giver, _), &receiver) in stack.iter().zip(&path) {
                    owner[receiver] = Some(giver);
                }
                return true;
            }
        }
    }
    false
}
