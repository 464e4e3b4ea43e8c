//! Round lifecycle and readiness.

use std::fmt;

use crate::participant::Roster;

/// Lifecycle of one annual exchange.
///
/// `Draft` opens automatically once it has participants. `Open` only moves
/// to `Assigned` through an explicit round start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoundStatus {
    #[default]
    Draft,
    Open,
    Assigned,
    Closed,
}

impl RoundStatus {
    /// Participants and settings may still change.
    pub fn can_modify(self) -> bool {
        matches!(self, RoundStatus::Draft | RoundStatus::Open)
    }

    /// Applies the automatic `Draft -> Open` transition.
    pub fn refresh(self, participant_count: usize) -> Self {
        match self {
            RoundStatus::Draft if participant_count > 0 => RoundStatus::Open,
            other => other,
        }
    }

    /// Returns the next status, or `None` if the transition is not allowed.
    pub fn advance(self, to: RoundStatus) -> Option<RoundStatus> {
        let allowed = matches!(
            (self, to),
            (RoundStatus::Draft, RoundStatus::Open)
                | (RoundStatus::Open, RoundStatus::Assigned)
                | (RoundStatus::Assigned, RoundStatus::Closed)
        );
        allowed.then_some(to)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundStatus::Draft => write!(f, "draft"),
            RoundStatus::Open => write!(f, "open"),
            RoundStatus::Assigned => write!(f, "assigned"),
            RoundStatus::Closed => write!(f, "closed"),
        }
    }
}

/// Readiness counters for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSummary {
    pub status: RoundStatus,
    pub total_participants: usize,
    pub participants_with_messages: usize,
    pub participants_without_messages: usize,
    /// At least two active participants and the round is open.
    pub can_assign: bool,
    /// `can_assign` and every active participant submitted a message.
    pub ready_for_assignment: bool,
}

impl RoundSummary {
    /// Summarizes the active participants of `roster`.
    pub fn new(roster: &Roster, status: RoundStatus) -> Self {
        let total = roster.active().count();
        let with_messages = roster.active().filter(|p| p.has_message).count();
        let can_assign = total >= 2 && status == RoundStatus::Open;

        Self {
            status,
            total_participants: total,
            participants_with_messages: with_messages,
            participants_without_messages: total - with_messages,
            can_assign,
            ready_for_assignment: can_assign && with_messages == total,
        }
    }
}
