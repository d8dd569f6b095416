//! Built-in eligibility rules.
//!
//! # Categories
//!
//! - **Credential**: LICENSE, UNIT_TYPE
//! - **Location**: BASE
//! - **Duty**: AVAILABLE, HOURS
//! - **Binding**: FIXED_UNIT
//!
//! Every rule has a matching free predicate function for direct use.

use super::EligibilityRule;
use crate::models::{Operator, Trip, Unit};

/// Operator's license class equals the unit's required class.
pub fn license_matches(operator: &Operator, unit: &Unit) -> bool {
    operator.license_class == unit.required_license
}

/// Operator's home base equals the unit's home base.
pub fn base_matches(operator: &Operator, unit: &Unit) -> bool {
    operator.home_base == unit.home_base
}

/// Operator is flagged available.
pub fn is_available(operator: &Operator) -> bool {
    operator.available
}

/// Trip fits inside the operator's daily hours.
pub fn within_hours(operator: &Operator, trip: &Trip) -> bool {
    trip.duration_hours <= operator.max_daily_hours
}

/// Unit's type is in the operator's permitted set. Unknown type = `false`.
pub fn unit_type_permitted(operator: &Operator, unit: &Unit) -> bool {
    unit.unit_type
        .as_deref()
        .is_some_and(|t| operator.permits_unit_type(t))
}

/// Operator is unbound, or bound to exactly this unit.
pub fn fixed_unit_allows(operator: &Operator, unit: &Unit) -> bool {
    operator
        .fixed_unit_id
        .as_deref()
        .map_or(true, |bound| bound == unit.id)
}

// ======================== Credential rules ========================

/// License class match.
#[derive(Debug, Clone, Copy)]
pub struct LicenseMatch;

impl EligibilityRule for LicenseMatch {
    fn name(&self) -> &'static str {
        "LICENSE"
    }

    fn is_satisfied(&self, operator: &Operator, unit: &Unit, _trip: &Trip) -> bool {
        license_matches(operator, unit)
    }

    fn description(&self) -> &'static str {
        "License class matches unit requirement"
    }
}

/// Unit-type capability.
///
/// Requires the unit's type to be known and listed in the operator's
/// permitted types.
#[derive(Debug, Clone, Copy)]
pub struct UnitTypeCapability;

impl EligibilityRule for UnitTypeCapability {
    fn name(&self) -> &'static str {
        "UNIT_TYPE"
    }

    fn is_satisfied(&self, operator: &Operator, unit: &Unit, _trip: &Trip) -> bool {
        unit_type_permitted(operator, unit)
    }

    fn description(&self) -> &'static str {
        "Operator is qualified for the unit type"
    }
}

// ======================== Location rules ========================

/// Home base match.
#[derive(Debug, Clone, Copy)]
pub struct BaseMatch;

impl EligibilityRule for BaseMatch {
    fn name(&self) -> &'static str {
        "BASE"
    }

    fn is_satisfied(&self, operator: &Operator, unit: &Unit, _trip: &Trip) -> bool {
        base_matches(operator, unit)
    }

    fn description(&self) -> &'static str {
        "Operator and unit share a home base"
    }
}

// ======================== Duty rules ========================

/// Availability flag.
#[derive(Debug, Clone, Copy)]
pub struct Availability;

impl EligibilityRule for Availability {
    fn name(&self) -> &'static str {
        "AVAILABLE"
    }

    fn is_satisfied(&self, operator: &Operator, _unit: &Unit, _trip: &Trip) -> bool {
        is_available(operator)
    }

    fn description(&self) -> &'static str {
        "Operator is available for dispatch"
    }
}

/// Daily hours budget.
///
/// Inclusive: a trip exactly as long as the limit is allowed.
#[derive(Debug, Clone, Copy)]
pub struct HoursBudget;

impl EligibilityRule for HoursBudget {
    fn name(&self) -> &'static str {
        "HOURS"
    }

    fn is_satisfied(&self, operator: &Operator, _unit: &Unit, trip: &Trip) -> bool {
        within_hours(operator, trip)
    }

    fn description(&self) -> &'static str {
        "Trip duration within daily hours limit"
    }
}

// ======================== Binding rules ========================

/// Fixed operator-unit binding.
#[derive(Debug, Clone, Copy)]
pub struct FixedUnitBinding;

impl EligibilityRule for FixedUnitBinding {
    fn name(&self) -> &'static str {
        "FIXED_UNIT"
    }

    fn is_satisfied(&self, operator: &Operator, unit: &Unit, _trip: &Trip) -> bool {
        fixed_unit_allows(operator, unit)
    }

    fn description(&self) -> &'static str {
        "Operator is unbound or bound to this unit"
    }
}
