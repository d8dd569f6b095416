//! Greedy per-trip operator assignment.
//!
//! # Algorithm
//!
//! 1. Order trips by ascending `(priority, departure)` (stable).
//! 2. For each trip, resolve its unit; a missing or inactive unit yields
//!    an unassigned record.
//! 3. Filter unconsumed operators through the eligibility policy.
//! 4. Pick the minimum-score candidate; ties go to the earliest operator
//!    in the caller's slice.
//! 5. Mark the operator consumed and emit the assignment.
//!
//! Decisions are final: an operator committed to an earlier trip is never
//! released for a later one, even if that would lower total cost.
//!
//! # Complexity
//! O(t log t + t * o * r) where t=trips, o=operators, r=rules.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument, trace};

use crate::config::{AssignerConfig, ConfigError};
use crate::eligibility::{EligibilityPolicy, PolicyKind};
use crate::models::{Assignment, Operator, Trip, UnassignedReason, Unit};
use crate::scoring::{CandidateScore, CostScorer};

/// Input container for an assignment run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Operator pool, in tie-break order.
    pub operators: Vec<Operator>,
    /// Units keyed by id.
    pub units: HashMap<String, Unit>,
    /// Trips to cover.
    pub trips: Vec<Trip>,
}

impl AssignmentRequest {
    /// Creates a request from an already keyed unit map.
    pub fn new(operators: Vec<Operator>, units: HashMap<String, Unit>, trips: Vec<Trip>) -> Self {
        Self {
            operators,
            units,
            trips,
        }
    }

    /// Creates a request, keying units by their own id.
    ///
    /// A later unit with a repeated id replaces the earlier one.
    pub fn from_unit_list(
        operators: Vec<Operator>,
        units: impl IntoIterator<Item = Unit>,
        trips: Vec<Trip>,
    ) -> Self {
        let units = units.into_iter().map(|u| (u.id.clone(), u)).collect();
        Self::new(operators, units, trips)
    }
}

/// Greedy operator-to-trip assigner.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use chrono::NaiveDate;
/// use u_fleet::models::{Operator, Trip, Unit, AssignmentReason};
/// use u_fleet::scheduler::GreedyAssigner;
///
/// let departure = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let operators = vec![Operator::new("OP01", "B", "Veracruz").with_cost(120.0)];
/// let units = HashMap::from([("U01".to_string(), Unit::new("U01", "B", "Veracruz"))]);
/// let trips = vec![Trip::new("V01", "U01", departure).with_duration_hours(5.0)];
///
/// let assignments = GreedyAssigner::basic().assign(&operators, &units, &trips);
/// assert_eq!(assignments.len(), 1);
/// assert_eq!(assignments[0].operator_id.as_deref(), Some("OP01"));
/// assert_eq!(assignments[0].reason, AssignmentReason::Ok);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAssigner {
    policy: EligibilityPolicy,
    scorer: CostScorer,
}

impl GreedyAssigner {
    /// Creates an assigner with the given policy and default scoring.
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self {
            policy,
            scorer: CostScorer::default(),
        }
    }

    /// Assigner using the basic policy.
    pub fn basic() -> Self {
        Self::new(EligibilityPolicy::basic())
    }

    /// Assigner using the extended policy.
    pub fn extended() -> Self {
        Self::new(EligibilityPolicy::extended())
    }

    /// Builds an assigner from a validated configuration.
    pub fn from_config(config: &AssignerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(EligibilityPolicy::from(config.policy))
            .with_scorer(CostScorer::new(config.priority_weight)))
    }

    /// Sets the scorer.
    pub fn with_scorer(mut self, scorer: CostScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Active eligibility policy.
    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// Active scorer.
    pub fn scorer(&self) -> &CostScorer {
        &self.scorer
    }

    /// Assigns operators to trips.
    ///
    /// Returns exactly one record per trip, in processing order
    /// (ascending priority, then departure), which may differ from the
    /// order of `trips`. Each operator is used at most once.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            policy = %self.policy.name(),
            operators = operators.len(),
            units = units.len(),
            trips = trips.len()
        )
    )]
    pub fn assign(
        &self,
        operators: &[Operator],
        units: &HashMap<String, Unit>,
        trips: &[Trip],
    ) -> Vec<Assignment> {
        let mut assignments = Vec::with_capacity(trips.len());
        let mut consumed: HashSet<&str> = HashSet::new();

        for &trip_idx in &trip_order(trips) {
            let trip = &trips[trip_idx];

            let unit = match units.get(&trip.unit_id) {
                None => {
                    debug!(trip = %trip.id, unit = %trip.unit_id, "unit does not exist");
                    assignments.push(Assignment::unassigned(
                        &trip.id,
                        &trip.unit_id,
                        UnassignedReason::UnitNotFound,
                    ));
                    continue;
                }
                Some(unit) if !unit.active => {
                    debug!(trip = %trip.id, unit = %trip.unit_id, "unit inactive");
                    assignments.push(Assignment::unassigned(
                        &trip.id,
                        &trip.unit_id,
                        UnassignedReason::UnitInactive,
                    ));
                    continue;
                }
                Some(unit) => unit,
            };

            match self.select_operator(operators, &consumed, unit, trip) {
                Some((operator, score)) => {
                    debug!(trip = %trip.id, operator = %operator.id, score, "assigned");
                    consumed.insert(operator.id.as_str());
                    assignments.push(Assignment::assigned(&trip.id, &trip.unit_id, &operator.id));
                }
                None => {
                    debug!(trip = %trip.id, unit = %unit.id, "no eligible operator");
                    assignments.push(Assignment::unassigned(
                        &trip.id,
                        &trip.unit_id,
                        UnassignedReason::NoEligibleOperator,
                    ));
                }
            }
        }

        let assigned = assignments.iter().filter(|a| a.is_assigned()).count();
        info!(
            assigned,
            unassigned = assignments.len() - assigned,
            "assignment run complete"
        );

        assignments
    }

    /// Assigns from a request.
    pub fn assign_request(&self, request: &AssignmentRequest) -> Vec<Assignment> {
        self.assign(&request.operators, &request.units, &request.trips)
    }

    /// Lowest-scoring eligible, unconsumed operator. First wins on ties.
    fn select_operator<'a>(
        &self,
        operators: &'a [Operator],
        consumed: &HashSet<&str>,
        unit: &Unit,
        trip: &Trip,
    ) -> Option<(&'a Operator, CandidateScore)> {
        let mut best: Option<(&'a Operator, CandidateScore)> = None;

        for operator in operators {
            if consumed.contains(operator.id.as_str()) {
                continue;
            }
            if let Some(rule) = self.policy.failing_rule(operator, unit, trip) {
                trace!(trip = %trip.id, operator = %operator.id, rule, "rejected");
                continue;
            }

            let score = self.scorer.score(operator, trip);
            // A NaN score never beats a comparable one.
            let better = match best {
                None => true,
                Some((_, best_score)) => {
                    score < best_score || (best_score.is_nan() && !score.is_nan())
                }
            };
            if better {
                best = Some((operator, score));
            }
        }

        best
    }
}

/// Assigns operators to trips with a built-in policy and default scoring.
pub fn assign(
    operators: &[Operator],
    units: &HashMap<String, Unit>,
    trips: &[Trip],
    policy: PolicyKind,
) -> Vec<Assignment> {
    GreedyAssigner::new(EligibilityPolicy::from(policy)).assign(operators, units, trips)
}

/// Trip indices in processing order: ascending `(priority, departure)`,
/// input order preserved on ties.
pub fn trip_order(trips: &[Trip]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..trips.len()).collect();
    indices.sort_by(|&a, &b| {
        trips[a]
            .priority
            .cmp(&trips[b].priority)
            .then_with(|| trips[a].departure.cmp(&trips[b].departure))
    });
    indices
}
