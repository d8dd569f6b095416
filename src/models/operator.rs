//! Operator (driver) model.
//!
//! Operators are the people assigned to trips. Each operator holds a
//! license class, a home base, a daily hours limit and an hourly cost,
//! plus the optional capability data used by the extended rule policy.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default maximum duty hours per day.
pub const DEFAULT_MAX_DAILY_HOURS: f64 = 8.0;

/// An operator that can be assigned to a trip.
///
/// Immutable for the duration of a planning run. Optional capability
/// fields resolve to explicit empty/absent values at construction time,
/// so rule evaluation never has to guess a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operator {
    /// Unique operator identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// License class held (e.g., "B", "FEDERAL").
    pub license_class: String,
    /// Home base the operator works out of.
    pub home_base: String,
    /// Whether the operator can be dispatched at all.
    #[serde(default = "default_available")]
    pub available: bool,
    /// Maximum hours per duty day.
    #[serde(default = "default_max_daily_hours")]
    pub max_daily_hours: f64,
    /// Hourly cost rate.
    #[serde(default)]
    pub cost_per_hour: f64,
    /// Unit types this operator is qualified for. Empty = none.
    #[serde(default)]
    pub permitted_unit_types: BTreeSet<String>,
    /// Unit this operator is bound to, if any.
    #[serde(default)]
    pub fixed_unit_id: Option<String>,
    /// Most recent departure driven, if known. Informational; no rule reads it.
    #[serde(default)]
    pub last_departure: Option<NaiveDateTime>,
}

fn default_available() -> bool {
    true
}

fn default_max_daily_hours() -> f64 {
    DEFAULT_MAX_DAILY_HOURS
}

impl Operator {
    /// Creates an available operator with default limits and zero cost.
    pub fn new(
        id: impl Into<String>,
        license_class: impl Into<String>,
        home_base: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            license_class: license_class.into(),
            home_base: home_base.into(),
            available: true,
            max_daily_hours: DEFAULT_MAX_DAILY_HOURS,
            cost_per_hour: 0.0,
            permitted_unit_types: BTreeSet::new(),
            fixed_unit_id: None,
            last_departure: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the availability flag.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Sets the maximum hours per duty day.
    pub fn with_max_daily_hours(mut self, hours: f64) -> Self {
        self.max_daily_hours = hours;
        self
    }

    /// Sets the hourly cost.
    pub fn with_cost(mut self, cost_per_hour: f64) -> Self {
        self.cost_per_hour = cost_per_hour;
        self
    }

    /// Adds a permitted unit type.
    pub fn with_unit_type(mut self, unit_type: impl Into<String>) -> Self {
        self.permitted_unit_types.insert(unit_type.into());
        self
    }

    /// Binds the operator to a single unit.
    pub fn with_fixed_unit(mut self, unit_id: impl Into<String>) -> Self {
        self.fixed_unit_id = Some(unit_id.into());
        self
    }

    /// Records the operator's most recent departure.
    pub fn with_last_departure(mut self, departure: NaiveDateTime) -> Self {
        self.last_departure = Some(departure);
        self
    }

    /// Whether this operator may drive units of the given type.
    pub fn permits_unit_type(&self, unit_type: &str) -> bool {
        self.permitted_unit_types.contains(unit_type)
    }

    /// Whether this operator carries a fixed unit binding.
    pub fn is_bound(&self) -> bool {
        self.fixed_unit_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_builder() {
        let op = Operator::new("OP01", "B", "Veracruz")
            .with_name("Juan")
            .with_cost(120.0)
            .with_max_daily_hours(10.0)
            .with_unit_type("Torton")
            .with_unit_type("Rabon")
            .with_fixed_unit("U01");

        assert_eq!(op.id, "OP01");
        assert_eq!(op.name, "Juan");
        assert_eq!(op.license_class, "B");
        assert_eq!(op.home_base, "Veracruz");
        assert!(op.available);
        assert!((op.cost_per_hour - 120.0).abs() < 1e-10);
        assert!((op.max_daily_hours - 10.0).abs() < 1e-10);
        assert!(op.permits_unit_type("Torton"));
        assert!(!op.permits_unit_type("Tracto"));
        assert_eq!(op.fixed_unit_id.as_deref(), Some("U01"));
        assert!(op.is_bound());
    }

    #[test]
    fn test_operator_defaults() {
        let op = Operator::new("OP01", "B", "Veracruz");
        assert!(op.available);
        assert!((op.max_daily_hours - DEFAULT_MAX_DAILY_HOURS).abs() < 1e-10);
        assert!((op.cost_per_hour - 0.0).abs() < 1e-10);
        assert!(op.permitted_unit_types.is_empty());
        assert!(!op.is_bound());
        assert!(op.last_departure.is_none());
    }

    #[test]
    fn test_operator_last_departure() {
        let departure = chrono::NaiveDate::from_ymd_opt(2026, 1, 12)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        let op = Operator::new("OP01", "B", "Veracruz").with_last_departure(departure);
        assert_eq!(op.last_departure, Some(departure));

        let json = r#"{"id":"OP01","license_class":"B","home_base":"Veracruz","last_departure":"2026-01-12T18:30:00"}"#;
        let parsed: Operator = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, op);
    }

    #[test]
    fn test_operator_deserialize_defaults() {
        let json = r#"{"id":"OP02","license_class":"FEDERAL","home_base":"Puebla"}"#;
        let op: Operator = serde_json::from_str(json).unwrap();
        assert_eq!(op, Operator::new("OP02", "FEDERAL", "Puebla"));
    }
}
