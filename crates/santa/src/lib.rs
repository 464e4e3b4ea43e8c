//! Santa - Secret Santa round management
//!
//! Register participants, start a round, and get a fair assignment that
//! never pairs anyone with themselves or with someone they gave to in the
//! recent rounds.
//!
//! # Example
//!
//! ```rust
//! use santa::prelude::*;
//!
//! let roster = Roster::new(vec![
//!     Participant::new(1, "Ann"),
//!     Participant::new(2, "Ben"),
//!     Participant::new(3, "Cat"),
//! ]).unwrap();
//! let history = History::new();
//! let config = EngineConfig::new().with_random_seed(1);
//!
//! let outcome = start_round(&RoundRequest::new(&roster, &history, 2026, &config)).unwrap();
//! assert_eq!(outcome.history_rows.len(), 3);
//! assert_eq!(outcome.status, RoundStatus::Assigned);
//! ```

pub use santa_config::{ConfigError, EngineConfig, TerminationConfig};
pub use santa_core::{
    Assignment, HistoricalAssignment, History, HistoryWindow, Participant, ParticipantId, Result,
    RoundRecord, RoundStatus, RoundSummary, Roster, Rule, SantaError, Violation,
};
pub use santa_engine::{
    feasibility_hint, feasibility_report, generate_assignment, is_valid, validate,
    validate_assignment, AssignmentGenerator, Feasibility, FeasibilityReport, ForbiddenPairSet,
    SearchStats, Solution,
};

#[cfg(feature = "console")]
pub mod console;
mod round;


pub use round::{apply_manual_edit, start_round, RoundOutcome, RoundRequest};

/// Commonly used types.
pub mod prelude {
    pub use crate::round::{apply_manual_edit, start_round, RoundOutcome, RoundRequest};
    pub use santa_config::EngineConfig;
    pub use santa_core::{
        Assignment, History, Participant, ParticipantId, RoundStatus, Roster, SantaError,
    };
}
