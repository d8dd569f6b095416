//! Assignment run metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assigned | Trips that received an operator |
//! | Unassigned | Trips left without an operator, by reason |
//! | Assignment Rate | assigned / total trips |
//! | Total Cost | Sum of cost_per_hour * duration_hours over assigned trips |

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::models::{Assignment, AssignmentReason, Operator, Trip};

/// Summary indicators for one assignment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSummary {
    /// Number of assignment records.
    pub total_trips: usize,
    /// Records with an operator.
    pub assigned: usize,
    /// Records without an operator.
    pub unassigned: usize,
    /// Record count per outcome (including `Ok`).
    pub by_reason: BTreeMap<AssignmentReason, usize>,
    /// Fraction of trips assigned (0.0..1.0). 1.0 for an empty run.
    pub assignment_rate: f64,
    /// Labour cost of all assigned trips.
    pub total_cost: f64,
}

impl AssignmentSummary {
    /// Computes the summary of a run.
    ///
    /// # Arguments
    /// * `assignments` - Output of the assigner.
    /// * `operators` - Operator pool (for hourly cost).
    /// * `trips` - Input trips (for duration).
    ///
    /// Records whose operator or trip id is not found contribute no cost.
    pub fn calculate(assignments: &[Assignment], operators: &[Operator], trips: &[Trip]) -> Self {
        let operators_by_id: HashMap<&str, &Operator> =
            operators.iter().map(|o| (o.id.as_str(), o)).collect();
        let trips_by_id: HashMap<&str, &Trip> = trips.iter().map(|t| (t.id.as_str(), t)).collect();

        let mut by_reason = BTreeMap::new();
        let mut assigned = 0;
        let mut total_cost = 0.0;

        for a in assignments {
            *by_reason.entry(a.reason).or_insert(0) += 1;

            if let Some(op_id) = a.operator_id.as_deref() {
                assigned += 1;
                if let (Some(op), Some(trip)) = (
                    operators_by_id.get(op_id),
                    trips_by_id.get(a.trip_id.as_str()),
                ) {
                    total_cost += op.cost_per_hour * trip.duration_hours;
                }
            }
        }

        let total_trips = assignments.len();
        let assignment_rate = if total_trips == 0 {
            1.0
        } else {
            assigned as f64 / total_trips as f64
        };

        Self {
            total_trips,
            assigned,
            unassigned: total_trips - assigned,
            by_reason,
            assignment_rate,
            total_cost,
        }
    }

    /// Count of records with the given outcome.
    pub fn count(&self, reason: AssignmentReason) -> usize {
        self.by_reason.get(&reason).copied().unwrap_or(0)
    }

    /// Whether every trip got an operator.
    pub fn is_complete(&self) -> bool {
        self.unassigned == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnassignedReason;
    use chrono::NaiveDate;

    fn trip(id: &str, hours: f64) -> Trip {
        let departure = NaiveDate::from_ymd_opt(2026, 1, 13)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Trip::new(id, "U01", departure).with_duration_hours(hours)
    }

    #[test]
    fn test_summary() {
        let operators = vec![
            Operator::new("OP01", "B", "Veracruz").with_cost(120.0),
            Operator::new("OP02", "FEDERAL", "Veracruz").with_cost(150.0),
        ];
        let trips = vec![trip("V01", 5.0), trip("V02", 8.0), trip("V03", 6.0), trip("V04", 1.0)];
        let assignments = vec![
            Assignment::assigned("V01", "U01", "OP01"),
            Assignment::assigned("V02", "U02", "OP02"),
            Assignment::unassigned("V03", "U01", UnassignedReason::NoEligibleOperator),
            Assignment::unassigned("V04", "U99", UnassignedReason::UnitNotFound),
        ];

        let summary = AssignmentSummary::calculate(&assignments, &operators, &trips);
        assert_eq!(summary.total_trips, 4);
        assert_eq!(summary.assigned, 2);
        assert_eq!(summary.unassigned, 2);
        assert_eq!(summary.count(AssignmentReason::Ok), 2);
        assert_eq!(summary.count(AssignmentReason::NoEligibleOperator), 1);
        assert_eq!(summary.count(AssignmentReason::UnitNotFound), 1);
        assert_eq!(summary.count(AssignmentReason::UnitInactive), 0);
        assert!((summary.assignment_rate - 0.5).abs() < 1e-10);
        // 120 * 5 + 150 * 8 = 1800
        assert!((summary.total_cost - 1800.0).abs() < 1e-10);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_empty_summary() {
        let summary = AssignmentSummary::calculate(&[], &[], &[]);
        assert_eq!(summary.total_trips, 0);
        assert!((summary.assignment_rate - 1.0).abs() < 1e-10);
        assert!(summary.is_complete());
        assert!(summary.by_reason.is_empty());
    }

    #[test]
    fn test_unknown_ids_add_no_cost() {
        let assignments = vec![Assignment::assigned("V01", "U01", "ghost")];
        let summary = AssignmentSummary::calculate(&assignments, &[], &[trip("V01", 5.0)]);
        assert_eq!(summary.assigned, 1);
        assert!((summary.total_cost - 0.0).abs() < 1e-10);
    }
}
