//! Santa Engine
//!
//! This crate turns a roster and a bounded pairing history into a new
//! round of Secret Santa assignments:
//! - Constraint model (forbidden pairs, validation, feasibility hints)
//! - Assignment generator (randomized restarts with local repair and an
//!   exact matching fallback)
//! - Termination conditions bounding the search
//! - Standalone validation of hand-edited assignments
//!
//! The engine is a pure function of its inputs: it holds no state between
//! invocations and never returns an assignment that fails validation.

pub mod constraint;
pub mod generator;
pub mod scope;
pub mod stats;
pub mod termination;
pub mod validation;

#[cfg(test)]
mod validation_tests;

pub use constraint::{
    feasibility_hint, feasibility_report, is_valid, validate, Feasibility, FeasibilityReport,
    ForbiddenPairSet,
};
pub use generator::{generate_assignment, AssignmentGenerator, Solution};
pub use scope::SearchScope;
pub use stats::SearchStats;
pub use termination::{
    OrTermination, RestartCountTermination, Termination, TimeTermination,
};
pub use validation::validate_assignment;
