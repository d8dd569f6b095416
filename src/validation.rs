//! Input validation for assignment runs.
//!
//! The assigner never rejects input: a trip pointing at a missing or
//! inactive unit is a normal outcome. These checks are for callers that
//! want to catch malformed data before planning. Detects:
//! - Duplicate operator or trip IDs
//! - Unit map keys that differ from the unit's own id
//! - Fixed unit bindings to units not in the map
//! - Negative or non-finite costs, hour limits and durations

use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::models::{Operator, Trip, Unit};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A unit is stored under a key other than its id.
    UnitKeyMismatch,
    /// An operator is bound to a unit that doesn't exist.
    InvalidUnitReference,
    /// A numeric field is negative or not finite.
    InvalidValue,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Validates the input of an assignment run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    operators: &[Operator],
    units: &HashMap<String, Unit>,
    trips: &[Trip],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut keys: Vec<&String> = units.keys().collect();
    keys.sort();
    for key in keys {
        let unit = &units[key];
        if unit.id != *key {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnitKeyMismatch,
                format!("Unit '{}' stored under key '{}'", unit.id, key),
            ));
        }
    }

    let mut operator_ids = HashSet::new();
    for op in operators {
        if !operator_ids.insert(op.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate operator ID: {}", op.id),
            ));
        }

        if !is_valid_amount(op.cost_per_hour) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!("Operator '{}' has invalid hourly cost {}", op.id, op.cost_per_hour),
            ));
        }
        if !is_valid_amount(op.max_daily_hours) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!(
                    "Operator '{}' has invalid daily hours limit {}",
                    op.id, op.max_daily_hours
                ),
            ));
        }

        if let Some(bound) = &op.fixed_unit_id {
            if !units.contains_key(bound) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidUnitReference,
                    format!("Operator '{}' is bound to unknown unit '{}'", op.id, bound),
                ));
            }
        }
    }

    let mut trip_ids = HashSet::new();
    for trip in trips {
        if !trip_ids.insert(trip.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate trip ID: {}", trip.id),
            ));
        }

        if !is_valid_amount(trip.duration_hours) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidValue,
                format!(
                    "Trip '{}' has invalid duration {}",
                    trip.id, trip.duration_hours
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trip(id: &str, unit_id: &str, hours: f64) -> Trip {
        let departure = NaiveDate::from_ymd_opt(2026, 1, 13)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Trip::new(id, unit_id, departure).with_duration_hours(hours)
    }

    fn sample_units() -> HashMap<String, Unit> {
        [
            Unit::new("U01", "B", "Veracruz"),
            Unit::new("U02", "FEDERAL", "Veracruz"),
        ]
        .into_iter()
        .map(|u| (u.id.clone(), u))
        .collect()
    }

    fn sample_operators() -> Vec<Operator> {
        vec![
            Operator::new("OP01", "B", "Veracruz").with_cost(120.0),
            Operator::new("OP02", "FEDERAL", "Veracruz")
                .with_cost(150.0)
                .with_fixed_unit("U02"),
        ]
    }

    #[test]
    fn test_valid_input() {
        let trips = vec![trip("V01", "U01", 5.0), trip("V02", "U02", 8.0)];
        assert!(validate_input(&sample_operators(), &sample_units(), &trips).is_ok());
    }

    #[test]
    fn test_missing_trip_unit_is_valid() {
        let trips = vec![trip("V01", "U99", 5.0)];
        assert!(validate_input(&sample_operators(), &sample_units(), &trips).is_ok());
    }

    #[test]
    fn test_duplicate_operator_id() {
        let mut operators = sample_operators();
        operators.push(Operator::new("OP01", "B", "Puebla"));

        let errors = validate_input(&operators, &sample_units(), &[]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::DuplicateId
            && e.message.contains("operator")));
    }

    #[test]
    fn test_duplicate_trip_id() {
        let trips = vec![trip("V01", "U01", 5.0), trip("V01", "U02", 8.0)];
        let errors = validate_input(&sample_operators(), &sample_units(), &trips).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "Duplicate trip ID: V01");
    }

    #[test]
    fn test_unit_key_mismatch() {
        let mut units = sample_units();
        units.insert("U03".into(), Unit::new("U04", "B", "Veracruz"));

        let errors = validate_input(&[], &units, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnitKeyMismatch));
    }

    #[test]
    fn test_unknown_fixed_unit() {
        let operators = vec![Operator::new("OP03", "B", "Veracruz").with_fixed_unit("U05")];
        let errors = validate_input(&operators, &sample_units(), &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidUnitReference));
    }

    #[test]
    fn test_invalid_values() {
        let operators = vec![
            Operator::new("OP01", "B", "Veracruz").with_cost(-1.0),
            Operator::new("OP02", "B", "Veracruz").with_max_daily_hours(f64::NAN),
        ];
        let trips = vec![trip("V01", "U01", f64::INFINITY)];

        let errors = validate_input(&operators, &sample_units(), &trips).unwrap_err();
        let invalid = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidValue)
            .count();
        assert_eq!(invalid, 3);
    }
}
