//! Tests for pairing history.

use crate::history::{HistoricalAssignment, History, HistoryWindow};
use crate::participant::ParticipantId;

fn sample() -> History {
    History::from_rows(vec![
        HistoricalAssignment::new(2022, 1, 2),
        HistoricalAssignment::new(2023, 1, 3),
        HistoricalAssignment::new(2024, 1, 4),
        HistoricalAssignment::new(2024, 4, 1),
        HistoricalAssignment::new(2025, 1, 5),
    ])
}

#[test]
fn test_rounds_before_excludes_current_and_future() {
    let history = sample();
    assert_eq!(history.rounds_before(2024), vec![2023, 2022]);
    assert!(history.rounds_before(2022).is_empty());
}

#[test]
fn test_lookback_selects_most_recent_prior_rounds() {
    let history = sample();
    let years = history.selected_rounds(&HistoryWindow::Lookback(2), 2025);
    assert_eq!(years.into_iter().collect::<Vec<_>>(), vec![2023, 2024]);

    let rows = history.select(&HistoryWindow::Lookback(2), 2025);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.round_year != 2025));
}

#[test]
fn test_lookback_skips_gap_years() {
    let history = History::from_rows(vec![
        HistoricalAssignment::new(2018, 1, 2),
        HistoricalAssignment::new(2021, 1, 3),
    ]);
    let years = history.selected_rounds(&HistoryWindow::default(), 2026);
    assert_eq!(years.into_iter().collect::<Vec<_>>(), vec![2018, 2021]);
}

#[test]
fn test_explicit_rounds_and_disabled() {
    let history = sample();
    let rows = history.select(&HistoryWindow::Rounds(vec![2022]), 2026);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].receiver, ParticipantId(2));

    assert!(history.select(&HistoryWindow::Disabled, 2026).is_empty());
    assert!(history.select(&HistoryWindow::Lookback(0), 2026).is_empty());
}

#[test]
fn test_explicit_rounds_ignore_current_and_future_years() {
    let mut history = sample();
    history.push(HistoricalAssignment::new(2026, 1, 2));
    history.push(HistoricalAssignment::new(2027, 1, 3));

    let window = HistoryWindow::Rounds(vec![2025, 2026, 2027]);
    let years = history.selected_rounds(&window, 2026);
    assert_eq!(years.into_iter().collect::<Vec<_>>(), vec![2025]);

    let rows = history.select(&window, 2026);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].round_year, 2025);
}

#[test]
fn test_recent_rounds_grouped_newest_first() {
    let history = sample();
    let report = history.recent_rounds(2026, 2);
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].round_year, 2025);
    assert_eq!(report[1].round_year, 2024);
    assert_eq!(
        report[1].pairs,
        vec![
            (ParticipantId(1), ParticipantId(4)),
            (ParticipantId(4), ParticipantId(1)),
        ]
    );
}
