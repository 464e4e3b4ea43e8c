//! Error types for the Secret Santa engine

use thiserror::Error;

use crate::violation::Violation;

/// Main error type for engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SantaError {
    /// Roster is empty or contains duplicate participant identifiers
    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    /// The search budget was exhausted without finding a valid assignment.
    ///
    /// `attempts` counts full restarts; it is zero when the instance was
    /// rejected before any search ran.
    #[error("Cannot generate a valid assignment after {attempts} attempt(s): {}", summarize(.violations))]
    AssignmentInfeasible {
        attempts: u64,
        violations: Vec<Violation>,
    },

    /// A hand-constructed assignment breaks at least one rule
    #[error("Assignment rejected: {}", summarize(.violations))]
    ValidationFailure { violations: Vec<Violation> },

    /// A round cannot be started in its current state
    #[error("Round not ready: {0}")]
    RoundNotReady(String),

    /// Engine configuration that cannot drive a search
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SantaError {
    /// Returns the violations carried by this error, if any.
    pub fn violations(&self) -> &[Violation] {
        match self {
            SantaError::AssignmentInfeasible { violations, .. }
            | SantaError::ValidationFailure { violations } => violations,
            _ => &[],
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    match violations {
        [] => "no diagnostics".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, SantaError>;
