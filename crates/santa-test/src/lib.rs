//! Shared test fixtures for the Secret Santa crates.
//!
//! This crate provides rosters and histories for testing.
//! It depends only on `santa-core`.
//!
//! - [`roster`] - Rosters built from names or sizes
//! - [`history`] - Cyclic and hand-written pairing histories
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! santa-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use santa_test::roster::{named_roster, sized_roster};
//! use santa_test::history::cyclic_history;
//! ```

pub mod history;
pub mod roster;

pub use history::{cyclic_history, history_of};
pub use roster::{id, named_roster, sized_roster};
