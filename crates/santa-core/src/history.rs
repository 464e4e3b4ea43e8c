//! Append-only pairing history.

use std::collections::{BTreeMap, BTreeSet};

use crate::participant::ParticipantId;

/// One finalized pairing: `giver` gave to `receiver` in `round_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoricalAssignment {
    pub round_year: i32,
    pub giver: ParticipantId,
    pub receiver: ParticipantId,
}

impl HistoricalAssignment {
    pub fn new(round_year: i32, giver: u64, receiver: u64) -> Self {
        Self {
            round_year,
            giver: ParticipantId(giver),
            receiver: ParticipantId(receiver),
        }
    }
}

/// Which past rounds constrain a new round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryWindow {
    /// The `n` most recent rounds strictly before the round being generated.
    ///
    /// Years without any recorded round are skipped, so a gap year does not
    /// shrink the window.
    Lookback(usize),
    /// These round years, limited to those before the round being generated.
    Rounds(Vec<i32>),
    /// Ignore history entirely.
    Disabled,
}

impl Default for HistoryWindow {
    fn default() -> Self {
        HistoryWindow::Lookback(2)
    }
}

/// All pairings of one past round, ordered by giver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub round_year: i32,
    pub pairs: Vec<(ParticipantId, ParticipantId)>,
}

/// Append-only collection of historical assignments.
///
/// Rows are never mutated once pushed.
///
/// # Example
///
/// ```
/// use santa_core::{HistoricalAssignment, History, HistoryWindow};
///
/// let history = History::from_rows(vec![
///     HistoricalAssignment::new(2023, 1, 2),
///     HistoricalAssignment::new(2024, 1, 3),
///     HistoricalAssignment::new(2025, 1, 4),
/// ]);
///
/// assert_eq!(history.rounds_before(2026), vec![2025, 2024, 2023]);
/// let selected = history.select(&HistoryWindow::Lookback(2), 2026);
/// assert_eq!(selected.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    rows: Vec<HistoricalAssignment>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<HistoricalAssignment>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: HistoricalAssignment) {
        self.rows.push(row);
    }

    pub fn extend(&mut self, rows: impl IntoIterator<Item = HistoricalAssignment>) {
        self.rows.extend(rows);
    }

    pub fn rows(&self) -> &[HistoricalAssignment] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct round years strictly before `round_year`, newest first.
    pub fn rounds_before(&self, round_year: i32) -> Vec<i32> {
        let years: BTreeSet<i32> = self
            .rows
            .iter()
            .map(|r| r.round_year)
            .filter(|&y| y < round_year)
            .collect();
        years.into_iter().rev().collect()
    }

    /// Whether any row was recorded for `round_year`.
    pub fn has_round(&self, round_year: i32) -> bool {
        self.rows.iter().any(|r| r.round_year == round_year)
    }

    /// Round years selected by `window` for a round in `round_year`.
    ///
    /// Only years strictly before `round_year` are ever selected. `Lookback(n)`
    /// counts rounds present in the history, not calendar years.
    pub fn selected_rounds(&self, window: &HistoryWindow, round_year: i32) -> BTreeSet<i32> {
        match window {
            HistoryWindow::Lookback(n) => {
                self.rounds_before(round_year).into_iter().take(*n).collect()
            }
            HistoryWindow::Rounds(years) => {
                years.iter().copied().filter(|&y| y < round_year).collect()
            }
            HistoryWindow::Disabled => BTreeSet::new(),
        }
    }

    /// Rows belonging to the rounds selected by `window`.
    pub fn select(&self, window: &HistoryWindow, round_year: i32) -> Vec<&HistoricalAssignment> {
        let years = self.selected_rounds(window, round_year);
        self.rows
            .iter()
            .filter(|r| years.contains(&r.round_year))
            .collect()
    }

    /// The `n` most recent rounds before `round_year`, grouped, newest first.
    pub fn recent_rounds(&self, round_year: i32, n: usize) -> Vec<RoundRecord> {
        let years: BTreeSet<i32> = self.rounds_before(round_year).into_iter().take(n).collect();
        let mut grouped: BTreeMap<i32, Vec<(ParticipantId, ParticipantId)>> = BTreeMap::new();
        for row in self.rows.iter().filter(|r| years.contains(&r.round_year)) {
            grouped
                .entry(row.round_year)
                .or_default()
                .push((row.giver, row.receiver));
        }

        grouped
            .into_iter()
            .rev()
            .map(|(round_year, mut pairs)| {
                pairs.sort();
                RoundRecord { round_year, pairs }
            })
            .collect()
    }
}

impl FromIterator<HistoricalAssignment> for History {
    fn from_iter<I: IntoIterator<Item = HistoricalAssignment>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
