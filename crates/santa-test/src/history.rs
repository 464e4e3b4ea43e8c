//! History fixtures.

use santa_core::{HistoricalAssignment, History};

/// Every year in `years`, participant `i` gave to participant `i + shift`
/// (1-based ids, wrapping around `n`).
///
/// With `shift = 1` and five participants this is `A→B→C→D→E→A`.
///
/// # Example
///
/// ```
/// use santa_test::history::cyclic_history;
///
/// let history = cyclic_history(5, &[2024, 2025], 1);
/// assert_eq!(history.len(), 10);
/// ```
pub fn cyclic_history(n: u64, years: &[i32], shift: u64) -> History {
    years
        .iter()
        .flat_map(|&year| {
            (0..n).map(move |i| HistoricalAssignment::new(year, i + 1, (i + shift) % n + 1))
        })
        .collect()
}

/// History from `(year, giver, receiver)` triples.
pub fn history_of(rows: &[(i32, u64, u64)]) -> History {
    rows.iter()
        .map(|&(year, giver, receiver)| HistoricalAssignment::new(year, giver, receiver))
        .collect()
}
