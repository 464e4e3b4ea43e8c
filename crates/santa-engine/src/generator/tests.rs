//! Tests for the assignment generator.

use santa_config::EngineConfig;
use santa_core::{Assignment, History, HistoryWindow, Participant, Roster, SantaError, Violation};
use santa_test::{cyclic_history, history_of, id, named_roster, sized_roster};

use super::*;
use crate::constraint::is_valid;

fn forbidden_for(roster: &Roster, history: &History, window: &HistoryWindow) -> ForbiddenPairSet {
    ForbiddenPairSet::build(roster, history, 2026, window).unwrap()
}

fn seeded(seed: u64) -> AssignmentGenerator {
    AssignmentGenerator::new(EngineConfig::new().with_random_seed(seed))
}

/// Six participants where every shift except `+5` was used in the last four rounds.
fn single_solution_instance() -> (Roster, ForbiddenPairSet) {
    let roster = sized_roster(6);
    let mut history = History::new();
    for (year, shift) in [(2022, 1), (2023, 2), (2024, 3), (2025, 4)] {
        history.extend(cyclic_history(6, &[year], shift).rows().iter().copied());
    }
    let forbidden = forbidden_for(&roster, &history, &HistoryWindow::Lookback(4));
    (roster, forbidden)
}

/// Givers #1 and #2 can both only give to #3.
fn hall_violation_instance() -> (Roster, ForbiddenPairSet) {
    let roster = sized_roster(4);
    let history = history_of(&[(2025, 1, 2), (2024, 1, 4), (2025, 2, 1), (2024, 2, 4)]);
    let forbidden = forbidden_for(&roster, &history, &HistoryWindow::default());
    (roster, forbidden)
}

#[test]
fn test_empty_history_always_valid() {
    for n in 3..=12 {
        let roster = sized_roster(n);
        let forbidden = forbidden_for(&roster, &History::new(), &HistoryWindow::default());
        for seed in 0..20 {
            let solution = seeded(seed).generate(&roster, &forbidden).unwrap();
            assert_eq!(solution.assignment.len(), n);
            assert!(validate(&solution.assignment, &roster, &forbidden).is_empty());
            assert!(solution
                .assignment
                .pairs()
                .all(|(giver, receiver)| giver != receiver));
        }
    }
}

#[test]
fn test_same_seed_same_assignment() {
    let roster = sized_roster(9);
    let history = cyclic_history(9, &[2024, 2025], 1);
    let forbidden = forbidden_for(&roster, &history, &HistoryWindow::default());

    let first = seeded(7).generate(&roster, &forbidden).unwrap();
    let second = seeded(7).generate(&roster, &forbidden).unwrap();
    assert_eq!(first.assignment, second.assignment);
    assert_eq!(first.stats.restarts, second.stats.restarts);
    assert_eq!(first.stats.swaps, second.stats.swaps);
}

#[test]
fn test_single_participant_infeasible_without_search() {
    let roster = sized_roster(1);
    let forbidden = forbidden_for(&roster, &History::new(), &HistoryWindow::default());

    let err = seeded(1).generate(&roster, &forbidden).unwrap_err();
    assert_eq!(
        err,
        SantaError::AssignmentInfeasible {
            attempts: 0,
            violations: vec![Violation::NoEligibleReceiver(id(1))],
        }
    );
}

#[test]
fn test_pair_without_history_swaps() {
    let roster = named_roster(&["A", "B"]);
    let forbidden = forbidden_for(&roster, &History::new(), &HistoryWindow::default());

    for seed in 0..10 {
        let solution = seeded(seed).generate(&roster, &forbidden).unwrap();
        assert_eq!(solution.assignment, Assignment::from_pairs([(1, 2), (2, 1)]));
    }
}

#[test]
fn test_pair_that_exchanged_last_year_is_infeasible() {
    let roster = named_roster(&["A", "B"]);
    let history = history_of(&[(2025, 1, 2), (2025, 2, 1)]);
    let forbidden = forbidden_for(&roster, &history, &HistoryWindow::default());

    match seeded(1).generate(&roster, &forbidden) {
        Err(SantaError::AssignmentInfeasible { attempts, violations }) => {
            assert_eq!(attempts, 0);
            assert!(!violations.is_empty());
        }
        other => panic!("expected infeasible, got {other:?}"),
    }
}

#[test]
fn test_pair_outside_lookback_is_feasible() {
    let roster = named_roster(&["A", "B"]);
    let history = history_of(&[(2022, 1, 2), (2023, 2, 3), (2024, 3, 1), (2025, 3, 2)]);
    let forbidden = forbidden_for(&roster, &history, &HistoryWindow::default());

    let solution = seeded(3).generate(&roster, &forbidden).unwrap();
    assert_eq!(solution.assignment, Assignment::from_pairs([(1, 2), (2, 1)]));
}

#[test]
fn test_cyclic_history_avoids_predecessors() {
    let roster = named_roster(&["A", "B", "C", "D", "E"]);
    let history = cyclic_history(5, &[2024, 2025], 1);
    let forbidden = forbidden_for(&roster, &history, &HistoryWindow::default());

    for seed in 0..30 {
        let solution = seeded(seed).generate(&roster, &forbidden).unwrap();
        assert!(is_valid(&solution.assignment, &roster, &forbidden));
        for (giver, receiver) in solution.assignment.pairs() {
            let next = giver.get() % 5 + 1;
            assert_ne!(receiver.get(), next, "{giver} received the same partner again");
            assert_ne!(receiver, giver);
        }
    }
}

#[test]
fn test_single_solution_found() {
    let (roster, forbidden) = single_solution_instance();
    let expected: Assignment = (1..=6u64).map(|g| (id(g), id((g + 4) % 6 + 1))).collect();

    for seed in 0..5 {
        let solution = seeded(seed).generate(&roster, &forbidden).unwrap();
        assert_eq!(solution.assignment, expected);
    }
}

#[test]
fn test_fallback_after_budget_exhausted() {
    let (roster, forbidden) = single_solution_instance();
    let config = EngineConfig::new()
        .with_random_seed(11)
        .with_restart_limit(1)
        .with_repair_passes(0);

    let solution = AssignmentGenerator::new(config)
        .generate(&roster, &forbidden)
        .unwrap();
    assert!(is_valid(&solution.assignment, &roster, &forbidden));
    assert_eq!(solution.stats.restarts, 1);
    // Without repair passes, only a lucky first shuffle avoids the fallback.
    if !solution.stats.fallback_used {
        assert_eq!(solution.stats.candidates_evaluated, 1);
    }
}

#[test]
fn test_no_fallback_reports_last_violations() {
    let (roster, forbidden) = hall_violation_instance();
    let config = EngineConfig::new()
        .with_random_seed(5)
        .with_restart_limit(4)
        .with_deterministic_fallback(false);

    match AssignmentGenerator::new(config).generate(&roster, &forbidden) {
        Err(SantaError::AssignmentInfeasible { attempts, violations }) => {
            assert_eq!(attempts, 4);
            assert!(!violations.is_empty());
            assert!(violations
                .iter()
                .all(|v| matches!(v, Violation::RepeatPair { .. } | Violation::SelfAssignment(_))));
        }
        other => panic!("expected infeasible, got {other:?}"),
    }
}

#[test]
fn test_fallback_confirms_infeasibility() {
    let (roster, forbidden) = hall_violation_instance();
    assert_eq!(
        crate::constraint::feasibility_hint(&roster, &forbidden),
        Feasibility::Marginal
    );

    let config = EngineConfig::new().with_random_seed(5).with_restart_limit(3);
    let err = AssignmentGenerator::new(config)
        .generate(&roster, &forbidden)
        .unwrap_err();
    assert!(matches!(
        err,
        SantaError::AssignmentInfeasible { attempts: 3, .. }
    ));
}

#[test]
fn test_perfect_matching() {
    let (_, forbidden) = single_solution_instance();
    let matrix = ConstraintMatrix::compile((1..=6).map(id).collect(), &forbidden);
    let candidate = matching::perfect_matching(&matrix).unwrap();
    assert_eq!(candidate.violation_count(&matrix), 0);

    let (roster, forbidden) = hall_violation_instance();
    let matrix = ConstraintMatrix::compile(roster.active_ids(), &forbidden);
    assert!(matching::perfect_matching(&matrix).is_none());
}

#[test]
fn test_perfect_matching_long_augmenting_path() {
    // Givers take their own position first; the last giver can only take
    // position 0, which shifts every earlier giver along by one.
    let n = 5_000;
    let matrix = ConstraintMatrix::from_fn((1..=n as u64).map(id).collect(), |g, r| {
        if g == n - 1 {
            r == 0
        } else {
            r == g || r == g + 1
        }
    });

    let candidate = matching::perfect_matching(&matrix).unwrap();
    assert_eq!(candidate.violation_count(&matrix), 0);
    let assignment = candidate.to_assignment(&matrix);
    assert_eq!(assignment.receiver_of(id(n as u64)), Some(id(1)));
    assert_eq!(assignment.receiver_of(id(1)), Some(id(2)));
}

#[test]
fn test_repair_fixes_identity() {
    let roster = sized_roster(6);
    let forbidden = forbidden_for(&roster, &History::new(), &HistoryWindow::default());
    let matrix = ConstraintMatrix::compile(roster.active_ids(), &forbidden);
    let mut scope = SearchScope::with_seed(3);
    scope.start_search();

    let mut candidate = Candidate::from_receivers((0..6).collect());
    assert_eq!(candidate.violation_count(&matrix), 6);

    let outcome = repair(&mut candidate, &matrix, 60, &mut scope);
    assert_eq!(outcome, RepairOutcome::Repaired);
    assert_eq!(candidate.violation_count(&matrix), 0);
    assert!(scope.stats().swaps >= 3);
}

#[test]
fn test_inactive_participants_excluded() {
    let roster = Roster::new(vec![
        Participant::new(1, "Ann"),
        Participant::new(2, "Ben"),
        Participant::new(3, "Cat"),
        Participant::new(4, "Dan").with_active(false),
    ])
    .unwrap();
    let forbidden = forbidden_for(&roster, &History::new(), &HistoryWindow::default());

    let solution = seeded(2).generate(&roster, &forbidden).unwrap();
    assert_eq!(solution.assignment.len(), 3);
    assert_eq!(solution.assignment.receiver_of(id(4)), None);
    assert_eq!(solution.assignment.giver_of(id(4)), None);
}

#[test]
fn test_all_inactive_is_invalid_roster() {
    let roster = Roster::new(vec![
        Participant::new(1, "Ann"),
        Participant::new(2, "Ben").with_active(false),
    ])
    .unwrap();
    let forbidden = forbidden_for(&roster, &History::new(), &HistoryWindow::default());
    let inactive = Roster::new(vec![
        Participant::new(1, "Ann").with_active(false),
        Participant::new(2, "Ben").with_active(false),
    ])
    .unwrap();

    let err = seeded(1).generate(&inactive, &forbidden).unwrap_err();
    assert!(matches!(err, SantaError::InvalidRoster(_)));
}

#[test]
fn test_generate_assignment_uses_config_window() {
    let roster = sized_roster(3);
    // Three-person rosters have two derangements; history forbids one of them.
    let history = history_of(&[(2025, 1, 2), (2025, 2, 3), (2025, 3, 1)]);

    let with_history = generate_assignment(
        &roster,
        &history,
        2026,
        &EngineConfig::new().with_random_seed(4),
    )
    .unwrap();
    assert_eq!(
        with_history.assignment,
        Assignment::from_pairs([(1, 3), (2, 1), (3, 2)])
    );

    for seed in 0..10 {
        let ignored = generate_assignment(
            &roster,
            &history,
            2026,
            &EngineConfig::new().with_random_seed(seed).with_lookback(0),
        )
        .unwrap();
        assert_eq!(ignored.assignment.len(), 3);
    }
}

#[test]
fn test_time_limit_still_solves() {
    let roster = sized_roster(20);
    let history = cyclic_history(20, &[2024, 2025], 3);
    let config = EngineConfig::new()
        .with_random_seed(9)
        .with_termination_seconds(5);

    let solution = generate_assignment(&roster, &history, 2026, &config).unwrap();
    assert_eq!(solution.assignment.len(), 20);
    assert!(solution.stats.restarts >= 1);
    assert!(solution.stats.candidates_evaluated >= solution.stats.restarts);
}

#[test]
fn test_zero_budget_rejected_before_search() {
    let roster = sized_roster(4);
    let forbidden = forbidden_for(&roster, &History::new(), &HistoryWindow::default());

    let no_restarts = EngineConfig::new()
        .with_restart_limit(0)
        .with_deterministic_fallback(false);
    let err = AssignmentGenerator::new(no_restarts)
        .generate(&roster, &forbidden)
        .unwrap_err();
    assert!(matches!(err, SantaError::InvalidConfig(ref msg) if msg.contains("restart_limit")));

    let no_time = EngineConfig::new().with_termination_seconds(0);
    let err = generate_assignment(&roster, &History::new(), 2026, &no_time).unwrap_err();
    assert!(matches!(err, SantaError::InvalidConfig(ref msg) if msg.contains("seconds_spent_limit")));
}

#[test]
fn test_generate_assignment_all_inactive_is_invalid_roster() {
    let roster = Roster::new(vec![
        Participant::new(1, "Ann").with_active(false),
        Participant::new(2, "Ben").with_active(false),
    ])
    .unwrap();

    let err = generate_assignment(&roster, &History::new(), 2026, &EngineConfig::new()).unwrap_err();
    assert!(matches!(err, SantaError::InvalidRoster(_)));
}
