//! Tests for standalone validation.

use santa_core::{Assignment, History, HistoryWindow, Rule, SantaError, Violation};
use santa_test::{cyclic_history, history_of, id, named_roster, sized_roster};

use crate::validation::validate_assignment;

#[test]
fn test_valid_edit_accepted() {
    let roster = named_roster(&["A", "B", "C", "D"]);
    let history = history_of(&[(2025, 1, 2), (2025, 2, 3), (2025, 3, 4), (2025, 4, 1)]);
    let edit = Assignment::from_pairs([(1, 3), (2, 4), (3, 1), (4, 2)]);

    assert!(validate_assignment(&edit, &roster, &history, 2026, &HistoryWindow::default()).is_ok());
}

#[test]
fn test_self_assignment_names_participant() {
    let roster = sized_roster(3);
    let edit = Assignment::from_pairs([(1, 2), (2, 1), (3, 3)]);

    let err = validate_assignment(&edit, &roster, &History::new(), 2026, &HistoryWindow::default())
        .unwrap_err();
    match &err {
        SantaError::ValidationFailure { violations } => {
            assert_eq!(violations, &vec![Violation::SelfAssignment(id(3))]);
            assert_eq!(violations[0].rule(), Rule::SelfAssignment);
            assert_eq!(violations[0].participants(), vec![id(3)]);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert!(err.to_string().contains("#3"));
}

#[test]
fn test_repeat_pair_within_window_rejected() {
    let roster = named_roster(&["A", "B", "C", "D", "E"]);
    let history = cyclic_history(5, &[2024, 2025], 1);
    let edit = Assignment::from_pairs([(1, 2), (2, 4), (3, 5), (4, 1), (5, 3)]);

    let err = validate_assignment(&edit, &roster, &history, 2026, &HistoryWindow::default())
        .unwrap_err();
    assert_eq!(
        err.violations(),
        &[Violation::RepeatPair {
            giver: id(1),
            receiver: id(2)
        }]
    );
}

#[test]
fn test_repeat_pair_outside_window_accepted() {
    let roster = named_roster(&["A", "B", "C"]);
    // Two later rounds push 2020 out of the default two-round window.
    let history = history_of(&[
        (2020, 1, 2),
        (2020, 2, 3),
        (2020, 3, 1),
        (2024, 1, 3),
        (2025, 2, 1),
    ]);
    let edit = Assignment::from_pairs([(1, 2), (2, 3), (3, 1)]);

    assert!(validate_assignment(&edit, &roster, &history, 2026, &HistoryWindow::default()).is_ok());
    assert!(validate_assignment(
        &edit,
        &roster,
        &history,
        2026,
        &HistoryWindow::Rounds(vec![2020])
    )
    .is_err());
}

#[test]
fn test_lookback_counts_recorded_rounds_not_calendar_years() {
    let roster = named_roster(&["A", "B", "C"]);
    let history = history_of(&[(2020, 1, 2), (2020, 2, 3), (2020, 3, 1)]);
    let edit = Assignment::from_pairs([(1, 2), (2, 3), (3, 1)]);

    let err = validate_assignment(&edit, &roster, &history, 2026, &HistoryWindow::default())
        .unwrap_err();
    assert_eq!(err.violations().len(), 3);
    assert!(err.violations().iter().all(|v| v.rule() == Rule::RepeatPair));
}

#[test]
fn test_incomplete_edit_rejected() {
    let roster = sized_roster(3);
    let edit = Assignment::from_pairs([(1, 2), (2, 1)]);

    let err = validate_assignment(&edit, &roster, &History::new(), 2026, &HistoryWindow::Disabled)
        .unwrap_err();
    assert!(err.violations().contains(&Violation::MissingGiver(id(3))));
    assert!(err.violations().contains(&Violation::MissingReceiver(id(3))));
    assert!(err.violations().iter().all(|v| v.rule() == Rule::Bijection));
}

#[test]
fn test_duplicate_giver_edit_rejected() {
    let roster = sized_roster(3);
    let edit = Assignment::from_pairs([(1, 3), (1, 2), (2, 3), (3, 1)]);

    let err = validate_assignment(&edit, &roster, &History::new(), 2026, &HistoryWindow::default())
        .unwrap_err();
    assert!(err.violations().contains(&Violation::DuplicateGiver {
        giver: id(1),
        receivers: vec![id(3), id(2)],
    }));
    assert!(err.to_string().contains("#1"));
}
