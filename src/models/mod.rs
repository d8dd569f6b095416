//! Dispatch planning domain models.
//!
//! Plain value records consumed and produced by the assignment engine.
//! The caller owns operators, units and trips; the engine borrows them
//! for one run and hands back newly built [`Assignment`] records.
//!
//! # Domain Mappings
//!
//! | u-fleet | Trucking | Transit | Aviation |
//! |---------|----------|---------|----------|
//! | Operator | Driver | Bus Driver | Pilot |
//! | Unit | Tractor/Truck | Bus | Aircraft |
//! | Trip | Load Run | Route Block | Flight Leg |

mod assignment;
mod operator;
mod trip;
mod unit;

pub use assignment::{Assignment, AssignmentError, AssignmentReason, UnassignedReason};
pub use operator::{Operator, DEFAULT_MAX_DAILY_HOURS};
pub use trip::{Trip, DEFAULT_PRIORITY};
pub use unit::Unit;
