//! Eligibility rules and rule policies for operator assignment.
//!
//! Each rule checks one hard constraint for an (operator, unit, trip)
//! triple. A policy is an ordered list of rules combined by logical AND;
//! the order only affects how early a rejection is found.
//!
//! # Usage
//!
//! ```
//! use u_fleet::eligibility::{EligibilityPolicy, PolicyKind};
//! use u_fleet::eligibility::rules;
//!
//! let extended = EligibilityPolicy::from(PolicyKind::Extended);
//! assert_eq!(extended.len(), 6);
//!
//! let custom = EligibilityPolicy::named("license-only")
//!     .with_rule(rules::Availability)
//!     .with_rule(rules::LicenseMatch);
//! assert_eq!(custom.rule_names(), vec!["AVAILABLE", "LICENSE"]);
//! ```
//!
//! # Fail-closed
//! Rules never error. A missing fact (e.g., unknown unit type) evaluates
//! to `false`.

mod policy;
pub mod rules;

pub use policy::{EligibilityPolicy, PolicyKind};

use crate::models::{Operator, Trip, Unit};
use std::fmt::Debug;

/// A hard constraint an operator must satisfy to be considered for a trip.
pub trait EligibilityRule: Send + Sync + Debug {
    /// Rule name (e.g., "LICENSE", "BASE").
    fn name(&self) -> &'static str;

    /// Whether `operator` may drive `unit` on `trip` under this rule.
    fn is_satisfied(&self, operator: &Operator, unit: &Unit, trip: &Trip) -> bool;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
