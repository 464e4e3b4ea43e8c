//! Constraint model: forbidden pairs, validity checks and feasibility hints.
//!
//! Both the generator and the standalone validator go through the same
//! predicates here, so a generated assignment can never disagree with the
//! validator about what is allowed.

mod feasibility;
mod forbidden;
mod matrix;
mod validate;

pub use feasibility::{feasibility_hint, feasibility_report, Feasibility, FeasibilityReport};
pub use forbidden::ForbiddenPairSet;
pub use validate::{is_valid, validate};

pub(crate) use feasibility::report_for;
pub(crate) use matrix::ConstraintMatrix;
