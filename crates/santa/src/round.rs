//! Round administration: starting a round and accepting manual edits.
//!
//! These are the entry points an API layer calls. They never persist
//! anything; the caller writes `history_rows` in one transaction and must
//! serialize concurrent starts for the same round year.

use santa_config::EngineConfig;
use santa_core::{
    Assignment, HistoricalAssignment, History, Result, RoundStatus, RoundSummary, Roster,
    SantaError,
};
use santa_engine::{generate_assignment, validate_assignment, SearchStats};
use tracing::info;

/// Inputs for starting a round.
#[derive(Debug, Clone, Copy)]
pub struct RoundRequest<'a> {
    pub roster: &'a Roster,
    pub history: &'a History,
    pub round_year: i32,
    pub status: RoundStatus,
    pub config: &'a EngineConfig,
}

impl<'a> RoundRequest<'a> {
    /// A request for a round still in `Draft`.
    pub fn new(
        roster: &'a Roster,
        history: &'a History,
        round_year: i32,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            roster,
            history,
            round_year,
            status: RoundStatus::Draft,
            config,
        }
    }

    pub fn with_status(mut self, status: RoundStatus) -> Self {
        self.status = status;
        self
    }
}

/// A started round, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round_year: i32,
    pub assignment: Assignment,
    /// Rows to append to the history.
    pub history_rows: Vec<HistoricalAssignment>,
    /// Always `Assigned`.
    pub status: RoundStatus,
    pub stats: SearchStats,
}

/// Starts a round: checks preconditions, then generates the assignment.
///
/// # Errors
///
/// - `RoundNotReady` if the round is not open, already has assignments, or
///   messages are required and missing
/// - any error from [`generate_assignment`]
pub fn start_round(request: &RoundRequest<'_>) -> Result<RoundOutcome> {
    let RoundRequest {
        roster,
        history,
        round_year,
        status,
        config,
    } = *request;

    let summary = RoundSummary::new(roster, status.refresh(roster.active().count()));
    if summary.status != RoundStatus::Open {
        return Err(SantaError::RoundNotReady(format!(
            "round {round_year} is {}",
            summary.status
        )));
    }
    if history.has_round(round_year) {
        return Err(SantaError::RoundNotReady(format!(
            "round {round_year} already has assignments"
        )));
    }
    if config.require_messages && summary.participants_without_messages > 0 {
        let missing: Vec<&str> = roster
            .active()
            .filter(|p| !p.has_message)
            .map(|p| p.name.as_str())
            .collect();
        return Err(SantaError::RoundNotReady(format!(
            "waiting for messages from {}",
            missing.join(", ")
        )));
    }

    let solution = generate_assignment(roster, history, round_year, config)?;
    let history_rows = solution.assignment.to_history(round_year);

    info!(
        event = "round_started",
        round_year,
        participants = summary.total_participants,
        restarts = solution.stats.restarts,
    );

    Ok(RoundOutcome {
        round_year,
        assignment: solution.assignment,
        history_rows,
        status: RoundStatus::Assigned,
        stats: solution.stats,
    })
}

/// Validates an administrator's hand-edited assignment for `round_year`.
///
/// Rows already recorded for `round_year` are ignored, so an assigned round
/// can be re-edited. Returns the rows that replace that round on success.
///
/// # Errors
///
/// `ValidationFailure` with every broken rule; nothing is corrected.
pub fn apply_manual_edit(
    candidate: &Assignment,
    roster: &Roster,
    history: &History,
    round_year: i32,
    config: &EngineConfig,
) -> Result<Vec<HistoricalAssignment>> {
    validate_assignment(
        candidate,
        roster,
        history,
        round_year,
        &config.history_window(),
    )?;
    Ok(candidate.to_history(round_year))
}
