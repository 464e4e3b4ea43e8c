//! Assignment generator.
//!
//! Produces one valid assignment or fails explicitly:
//! 1. Shuffle the receivers uniformly and pair them with the givers
//! 2. Accept the candidate if it breaks no constraint
//! 3. Otherwise run bounded local repair (receiver swaps)
//! 4. Restart from a fresh shuffle when repair runs out of passes
//! 5. Once the restart budget is spent, optionally run an exact matching
//!    search, then report `AssignmentInfeasible`
//!
//! Every accepted assignment is re-checked by the same validator that
//! handles manual edits before it is returned.

mod candidate;
mod matching;
mod repair;

use santa_config::EngineConfig;
use santa_core::{Assignment, History, Result, Roster, SantaError, Violation};
use tracing::{debug, info, warn};

use crate::constraint::{report_for, validate, ConstraintMatrix, Feasibility, ForbiddenPairSet};
use crate::scope::SearchScope;
use crate::stats::SearchStats;
use crate::termination::{OrTermination, RestartCountTermination, Termination, TimeTermination};

use candidate::Candidate;
use repair::{repair, RepairOutcome};

/// An accepted assignment together with how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub assignment: Assignment,
    pub stats: SearchStats,
}

/// Randomized restart search with local repair.
///
/// Deterministic for a fixed `random_seed`.
///
/// # Example
///
/// ```
/// use santa_config::EngineConfig;
/// use santa_core::{History, HistoryWindow, Participant, Roster};
/// use santa_engine::{is_valid, AssignmentGenerator, ForbiddenPairSet};
///
/// let roster = Roster::new((1..=6).map(|i| Participant::new(i, format!("P{i}"))).collect()).unwrap();
/// let forbidden = ForbiddenPairSet::build(&roster, &History::new(), 2026, &HistoryWindow::default()).unwrap();
///
/// let generator = AssignmentGenerator::new(EngineConfig::new().with_random_seed(42));
/// let solution = generator.generate(&roster, &forbidden).unwrap();
/// assert!(is_valid(&solution.assignment, &roster, &forbidden));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssignmentGenerator {
    config: EngineConfig,
}

impl AssignmentGenerator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates an assignment for the active participants of `roster`.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if the configured search budget is zero
    /// - `InvalidRoster` if nobody is active
    /// - `AssignmentInfeasible` if no valid assignment was found; `attempts`
    ///   is zero when the feasibility pre-check rejected the instance
    pub fn generate(&self, roster: &Roster, forbidden: &ForbiddenPairSet) -> Result<Solution> {
        self.config
            .validate()
            .map_err(|e| SantaError::InvalidConfig(e.to_string()))?;
        let active = roster.active_roster()?;
        let matrix = ConstraintMatrix::compile(active.active_ids(), forbidden);
        let n = matrix.len();

        let mut scope = SearchScope::from_seed(self.config.random_seed);
        scope.start_search();

        let report = report_for(&matrix);
        if report.feasibility == Feasibility::Infeasible {
            warn!(
                event = "infeasible",
                participants = n,
                obstructions = report.violations.len(),
                "Assignment rejected before search"
            );
            return Err(SantaError::AssignmentInfeasible {
                attempts: 0,
                violations: report.violations,
            });
        }

        let max_passes = self.config.repair_passes(n);
        let termination = OrTermination((
            RestartCountTermination::new(self.config.restart_limit()),
            self.config.time_limit().map(TimeTermination::new),
        ));

        info!(
            event = "search_start",
            participants = n,
            repeat_pairs = forbidden.repeat_pair_count(),
            feasibility = %report.feasibility,
            restart_limit = self.config.restart_limit(),
            repair_passes = max_passes,
        );

        let mut last_violations: Vec<Violation> = Vec::new();

        while !termination.is_terminated(&scope) {
            scope.stats_mut().record_restart();
            scope.stats_mut().record_candidate();

            let mut candidate = Candidate::shuffled(n, scope.rng());
            let initial = candidate.violation_count(&matrix);
            if initial == 0 {
                return self.accept(candidate, &matrix, &active, forbidden, scope);
            }

            match repair(&mut candidate, &matrix, max_passes, &mut scope) {
                RepairOutcome::Repaired => {
                    return self.accept(candidate, &matrix, &active, forbidden, scope);
                }
                outcome => {
                    last_violations = candidate.violations(&matrix);
                    debug!(
                        event = "restart",
                        restart = scope.restart_count(),
                        initial_violations = initial,
                        remaining_violations = last_violations.len(),
                        outcome = ?outcome,
                    );
                }
            }
        }

        let attempts = scope.restart_count();

        if self.config.deterministic_fallback {
            info!(event = "fallback", attempts, "Randomized search exhausted, running matching");
            if let Some(candidate) = matching::perfect_matching(&matrix) {
                scope.stats_mut().fallback_used = true;
                scope.stats_mut().record_candidate();
                return self.accept(candidate, &matrix, &active, forbidden, scope);
            }
        }

        warn!(
            event = "search_end",
            participants = n,
            attempts,
            violations = last_violations.len(),
            "No valid assignment found"
        );
        Err(SantaError::AssignmentInfeasible {
            attempts,
            violations: last_violations,
        })
    }

    fn accept(
        &self,
        candidate: Candidate,
        matrix: &ConstraintMatrix,
        roster: &Roster,
        forbidden: &ForbiddenPairSet,
        scope: SearchScope,
    ) -> Result<Solution> {
        let assignment = candidate.to_assignment(matrix);
        let violations = validate(&assignment, roster, forbidden);
        if !violations.is_empty() {
            return Err(SantaError::Internal(format!(
                "generated assignment failed validation with {} violation(s)",
                violations.len()
            )));
        }

        let stats = scope.finish();
        info!(
            event = "search_end",
            participants = assignment.len(),
            restarts = stats.restarts,
            repair_passes = stats.repair_passes,
            swaps = stats.swaps,
            fallback = stats.fallback_used,
            duration_ms = stats.elapsed.as_millis() as u64,
        );
        Ok(Solution { assignment, stats })
    }
}

/// Builds the forbidden set from the configured history window and generates
/// an assignment for a round in `round_year`.
///
/// # Example
///
/// ```
/// use santa_config::EngineConfig;
/// use santa_core::{History, Participant, Roster};
/// use santa_engine::generate_assignment;
///
/// let roster = Roster::new(vec![Participant::new(1, "Ann"), Participant::new(2, "Ben")]).unwrap();
/// let solution = generate_assignment(&roster, &History::new(), 2026, &EngineConfig::new()).unwrap();
/// assert_eq!(solution.assignment.len(), 2);
/// ```
pub fn generate_assignment(
    roster: &Roster,
    history: &History,
    round_year: i32,
    config: &EngineConfig,
) -> Result<Solution> {
    let forbidden =
        ForbiddenPairSet::build(roster, history, round_year, &config.history_window())?;
    AssignmentGenerator::new(config.clone()).generate(roster, &forbidden)
}

#[cfg(test)]
mod tests;
