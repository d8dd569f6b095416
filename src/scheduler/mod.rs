//! Greedy operator assignment and run metrics.
//!
//! # Algorithm
//!
//! `GreedyAssigner` walks trips in priority order and gives each one the
//! cheapest eligible operator still free. It is not optimal: it never
//! backtracks, so an early trip may take an operator a later trip needed.
//!
//! # Summary
//!
//! `AssignmentSummary` reports assigned/unassigned counts, outcome
//! breakdown and total labour cost.

mod greedy;
mod summary;

pub use greedy::{assign, trip_order, AssignmentRequest, GreedyAssigner};
pub use summary::AssignmentSummary;
