//! Participants and validated rosters.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Result, SantaError};

/// Stable identifier of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParticipantId(pub u64);

impl ParticipantId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ParticipantId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A member of the gift-exchange group.
///
/// Identity is immutable. The `active` flag excludes a participant from
/// future rounds without touching their history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "default_active"))]
    pub active: bool,
    /// Whether the participant has submitted their wish message.
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_message: bool,
}

#[cfg(feature = "serde")]
fn default_active() -> bool {
    true
}

impl Participant {
    /// Creates an active participant without a message.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId(id),
            name: name.into(),
            active: true,
            has_message: false,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_message(mut self, has_message: bool) -> Self {
        self.has_message = has_message;
        self
    }
}

/// A validated set of participants, ordered by id.
///
/// # Example
///
/// ```
/// use santa_core::{Participant, Roster};
///
/// let roster = Roster::new(vec![
///     Participant::new(2, "Bob"),
///     Participant::new(1, "Alice"),
///     Participant::new(3, "Carol").with_active(false),
/// ]).unwrap();
///
/// assert_eq!(roster.len(), 3);
/// assert_eq!(roster.active_ids().len(), 2);
/// assert!(Roster::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Builds a roster, rejecting an empty list and duplicate identifiers.
    pub fn new(mut participants: Vec<Participant>) -> Result<Self> {
        if participants.is_empty() {
            return Err(SantaError::InvalidRoster("roster is empty".to_string()));
        }

        participants.sort_by_key(|p| p.id);
        let duplicates: BTreeSet<ParticipantId> = participants
            .windows(2)
            .filter(|w| w[0].id == w[1].id)
            .map(|w| w[0].id)
            .collect();
        if !duplicates.is_empty() {
            let ids: Vec<String> = duplicates.iter().map(ToString::to_string).collect();
            return Err(SantaError::InvalidRoster(format!(
                "duplicate participant identifier(s): {}",
                ids.join(", ")
            )));
        }

        Ok(Self { participants })
    }

    /// Returns a roster containing only the active participants.
    ///
    /// Fails with `InvalidRoster` when nobody is active.
    pub fn active_roster(&self) -> Result<Self> {
        let active: Vec<Participant> = self.active().cloned().collect();
        if active.is_empty() {
            return Err(SantaError::InvalidRoster(
                "roster has no active participants".to_string(),
            ));
        }
        Ok(Self {
            participants: active,
        })
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn active(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.active)
    }

    /// Identifiers of active participants, in ascending order.
    pub fn active_ids(&self) -> Vec<ParticipantId> {
        self.active().map(|p| p.id).collect()
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|i| &self.participants[i])
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.get(id).is_some()
    }

    pub fn is_active(&self, id: ParticipantId) -> bool {
        self.get(id).is_some_and(|p| p.active)
    }

    /// Display name for `id`, if known.
    pub fn name_of(&self, id: ParticipantId) -> Option<&str> {
        self.get(id).map(|p| p.name.as_str())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.participants.iter()
    }
}
