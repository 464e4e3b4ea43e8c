//! Subcommand implementations.
//!
//! Each command returns the text to print so the output can be checked
//! without a terminal.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use santa::{
    apply_manual_edit, feasibility_hint, start_round, EngineConfig, ForbiddenPairSet,
    ParticipantId, RoundOutcome, RoundRequest, RoundStatus, RoundSummary, Roster, SantaError,
};
use serde::Serialize;

use crate::group::{AssignmentFile, GroupFile};

/// Loads the engine configuration, falling back to defaults.
pub fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    Ok(match seed {
        Some(seed) => config.with_random_seed(seed),
        None => config,
    })
}

fn name<'a>(roster: &'a Roster, id: ParticipantId) -> &'a str {
    roster.name_of(id).unwrap_or("?")
}

/// Rewrites engine errors so every violation names the people involved.
fn explain(err: SantaError, roster: &Roster) -> anyhow::Error {
    let violations = err.violations();
    if violations.is_empty() {
        return anyhow!(err);
    }

    let mut message = err.to_string();
    for violation in violations {
        let names: Vec<&str> = violation
            .participants()
            .into_iter()
            .map(|id| name(roster, id))
            .collect();
        let _ = write!(message, "\n  - {violation} ({})", names.join(", "));
    }
    anyhow!(message)
}

#[derive(Debug, Serialize)]
struct PairReport<'a> {
    giver: ParticipantId,
    giver_name: &'a str,
    receiver: ParticipantId,
    receiver_name: &'a str,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    restarts: u64,
    candidates_evaluated: u64,
    repair_passes: u64,
    swaps: u64,
    fallback_used: bool,
    elapsed_ms: u64,
}

#[derive(Debug, Serialize)]
struct RoundReport<'a> {
    round_year: i32,
    status: RoundStatus,
    pairs: Vec<PairReport<'a>>,
    stats: StatsReport,
}

impl<'a> RoundReport<'a> {
    fn new(outcome: &RoundOutcome, roster: &'a Roster) -> Self {
        let stats = &outcome.stats;
        Self {
            round_year: outcome.round_year,
            status: outcome.status,
            pairs: outcome
                .assignment
                .pairs()
                .map(|(giver, receiver)| PairReport {
                    giver,
                    giver_name: name(roster, giver),
                    receiver,
                    receiver_name: name(roster, receiver),
                })
                .collect(),
            stats: StatsReport {
                restarts: stats.restarts,
                candidates_evaluated: stats.candidates_evaluated,
                repair_passes: stats.repair_passes,
                swaps: stats.swaps,
                fallback_used: stats.fallback_used,
                elapsed_ms: stats.elapsed.as_millis() as u64,
            },
        }
    }
}

/// `santa generate`: starts the round and prints the pairs.
pub fn generate(
    group_path: &Path,
    round_year: i32,
    config: &EngineConfig,
    json: bool,
) -> Result<String> {
    let group = GroupFile::load(group_path)?;
    let roster = group.roster()?;
    let history = group.history();

    let request =
        RoundRequest::new(&roster, &history, round_year, config).with_status(group.status);
    let outcome = start_round(&request).map_err(|e| explain(e, &roster))?;
    let report = RoundReport::new(&outcome, &roster);

    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = String::new();
    writeln!(
        out,
        "Round {} ({} participants)",
        report.round_year,
        report.pairs.len()
    )?;
    for pair in &report.pairs {
        writeln!(out, "  {} -> {}", pair.giver_name, pair.receiver_name)?;
    }
    if report.stats.fallback_used {
        writeln!(out, "(found by exhaustive matching)")?;
    }
    Ok(out)
}

/// `santa validate`: checks a hand-edited assignment.
pub fn validate(
    group_path: &Path,
    round_year: i32,
    assignment_path: &Path,
    config: &EngineConfig,
) -> Result<String> {
    let group = GroupFile::load(group_path)?;
    let roster = group.roster()?;
    let history = group.history();
    let candidate = AssignmentFile::load(assignment_path)?.to_assignment();

    let rows = apply_manual_edit(&candidate, &roster, &history, round_year, config)
        .map_err(|e| explain(e, &roster))?;
    Ok(format!(
        "Assignment for {round_year} is valid ({} pairs)\n",
        rows.len()
    ))
}

/// `santa history`: the most recent rounds before `round_year`.
pub fn history(group_path: &Path, round_year: i32, rounds: usize) -> Result<String> {
    let group = GroupFile::load(group_path)?;
    let roster = group.roster()?;
    let records = group.history().recent_rounds(round_year, rounds);

    let mut out = String::new();
    if records.is_empty() {
        writeln!(out, "No rounds before {round_year}")?;
        return Ok(out);
    }
    for record in records {
        writeln!(out, "{}", record.round_year)?;
        for (giver, receiver) in record.pairs {
            writeln!(out, "  {} -> {}", name(&roster, giver), name(&roster, receiver))?;
        }
    }
    Ok(out)
}

/// `santa status`: readiness of the group for its next round.
pub fn status(group_path: &Path, round_year: Option<i32>, config: &EngineConfig) -> Result<String> {
    let group = GroupFile::load(group_path)?;
    let roster = group.roster()?;
    let active = roster.active().count();
    let summary = RoundSummary::new(&roster, group.status.refresh(active));

    let mut out = String::new();
    writeln!(out, "Status: {}", summary.status)?;
    writeln!(
        out,
        "Participants: {} ({} with messages, {} without)",
        summary.total_participants,
        summary.participants_with_messages,
        summary.participants_without_messages
    )?;
    writeln!(out, "Can assign: {}", yes_no(summary.can_assign))?;
    writeln!(
        out,
        "Ready for assignment: {}",
        yes_no(summary.ready_for_assignment)
    )?;

    let waiting: Vec<&str> = roster
        .active()
        .filter(|p| !p.has_message)
        .map(|p| p.name.as_str())
        .collect();
    if !waiting.is_empty() {
        writeln!(out, "Waiting for: {}", waiting.join(", "))?;
    }

    if let Some(round_year) = round_year {
        if active > 0 {
            let forbidden = ForbiddenPairSet::build(
                &roster,
                &group.history(),
                round_year,
                &config.history_window(),
            )?;
            writeln!(
                out,
                "Feasibility for {round_year}: {}",
                feasibility_hint(&roster, &forbidden)
            )?;
        }
    }
    Ok(out)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
