//! Santa Core - Value types for the Secret Santa assignment engine
//!
//! This crate provides the fundamental data model:
//! - Participants and validated rosters
//! - Append-only pairing history and history windows
//! - Candidate assignments and rule violations
//! - Round lifecycle and readiness summaries
//! - The shared error taxonomy

pub mod assignment;
pub mod error;
pub mod history;
pub mod participant;
pub mod round;
pub mod violation;

#[cfg(test)]
mod history_tests;

pub use assignment::Assignment;
pub use error::{Result, SantaError};
pub use history::{HistoricalAssignment, History, HistoryWindow, RoundRecord};
pub use participant::{Participant, ParticipantId, Roster};
pub use round::{RoundStatus, RoundSummary};
pub use violation::{Rule, Violation};
