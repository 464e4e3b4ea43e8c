//! Forbidden-pair sets compiled from history.

use std::collections::{BTreeMap, BTreeSet};

use santa_core::{History, HistoryWindow, ParticipantId, Result, Roster};

/// For each active participant, the receivers they must not get this round.
///
/// Every entry contains the participant themselves plus everyone they gave
/// to in the rounds selected by the history window. Participants that are
/// not active in the roster are ignored on both sides.
///
/// Built fresh for every invocation and never persisted.
///
/// # Example
///
/// ```
/// use santa_core::{HistoricalAssignment, History, HistoryWindow, Participant, ParticipantId, Roster};
/// use santa_engine::ForbiddenPairSet;
///
/// let roster = Roster::new(vec![
///     Participant::new(1, "Ann"),
///     Participant::new(2, "Ben"),
///     Participant::new(3, "Cat"),
/// ]).unwrap();
/// let history = History::from_rows(vec![HistoricalAssignment::new(2025, 1, 2)]);
///
/// let forbidden = ForbiddenPairSet::build(&roster, &history, 2026, &HistoryWindow::default()).unwrap();
/// assert!(forbidden.forbids(ParticipantId(1), ParticipantId(1)));
/// assert!(forbidden.forbids(ParticipantId(1), ParticipantId(2)));
/// assert!(!forbidden.forbids(ParticipantId(1), ParticipantId(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForbiddenPairSet {
    round_year: i32,
    entries: BTreeMap<ParticipantId, BTreeSet<ParticipantId>>,
}

impl ForbiddenPairSet {
    /// Compiles the forbidden set for a round in `round_year`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoster` if the roster has no active participants.
    pub fn build(
        roster: &Roster,
        history: &History,
        round_year: i32,
        window: &HistoryWindow,
    ) -> Result<Self> {
        let active = roster.active_roster()?;

        let mut entries: BTreeMap<ParticipantId, BTreeSet<ParticipantId>> = active
            .iter()
            .map(|p| (p.id, BTreeSet::from([p.id])))
            .collect();

        for row in history.select(window, round_year) {
            if !active.contains(row.receiver) {
                continue;
            }
            if let Some(set) = entries.get_mut(&row.giver) {
                set.insert(row.receiver);
            }
        }

        Ok(Self {
            round_year,
            entries,
        })
    }

    /// Compiles the forbidden set using the `lookback` most recent prior rounds.
    pub fn with_lookback(
        roster: &Roster,
        history: &History,
        round_year: i32,
        lookback: usize,
    ) -> Result<Self> {
        Self::build(roster, history, round_year, &HistoryWindow::Lookback(lookback))
    }

    /// The round this set was compiled for.
    pub fn round_year(&self) -> i32 {
        self.round_year
    }

    /// Whether `giver` must not give to `receiver`.
    ///
    /// Self-pairs are always forbidden, even for unknown participants.
    pub fn forbids(&self, giver: ParticipantId, receiver: ParticipantId) -> bool {
        giver == receiver
            || self
                .entries
                .get(&giver)
                .is_some_and(|set| set.contains(&receiver))
    }

    /// Whether `giver -> receiver` is forbidden by history rather than by identity.
    pub fn is_repeat(&self, giver: ParticipantId, receiver: ParticipantId) -> bool {
        giver != receiver && self.forbids(giver, receiver)
    }

    /// The forbidden receivers of `giver`, if `giver` is active.
    pub fn forbidden_for(&self, giver: ParticipantId) -> Option<&BTreeSet<ParticipantId>> {
        self.entries.get(&giver)
    }

    /// Active participants covered by this set, in ascending order.
    pub fn participants(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of forbidden pairs excluding self-pairs.
    pub fn repeat_pair_count(&self) -> usize {
        self.entries.values().map(|set| set.len() - 1).sum()
    }
}
