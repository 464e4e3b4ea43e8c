//! Roster fixtures.
//!
//! Participants get ids `1..=n` in the order given, so `"A"` is `#1`,
//! `"B"` is `#2`, and so on.
//!
//! # Example
//!
//! ```
//! use santa_test::roster::{id, named_roster};
//!
//! let roster = named_roster(&["A", "B", "C"]);
//! assert_eq!(roster.name_of(id(2)), Some("B"));
//! ```

use santa_core::{Participant, ParticipantId, Roster};

/// Shorthand for `ParticipantId(n)`.
pub fn id(n: u64) -> ParticipantId {
    ParticipantId(n)
}

/// Active participants named in order, with ids starting at 1.
pub fn named_participants(names: &[&str]) -> Vec<Participant> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Participant::new(i as u64 + 1, *name))
        .collect()
}

/// A roster of active participants named in order, with ids starting at 1.
///
/// # Panics
///
/// Panics if `names` is empty.
pub fn named_roster(names: &[&str]) -> Roster {
    Roster::new(named_participants(names)).expect("fixture roster must be valid")
}

/// A roster of `n` active participants `P1..Pn`.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn sized_roster(n: usize) -> Roster {
    let participants = (1..=n as u64)
        .map(|i| Participant::new(i, format!("P{i}")))
        .collect();
    Roster::new(participants).expect("fixture roster must be valid")
}
