//! Candidate scoring.
//!
//! `score = trip.priority * priority_weight + operator.cost_per_hour * trip.duration_hours`
//!
//! Lower is better. With the default weight of 1000 the priority term
//! dominates for any realistic cost and duration; cost only ranks
//! operators within one priority tier.

use serde::{Deserialize, Serialize};

use crate::models::{Operator, Trip};

/// Default multiplier applied to trip priority.
pub const DEFAULT_PRIORITY_WEIGHT: f64 = 1000.0;

/// Score of an (operator, trip) pair. Lower = better.
pub type CandidateScore = f64;

/// Scores an operator for a trip with the default priority weight.
pub fn score(operator: &Operator, trip: &Trip) -> CandidateScore {
    CostScorer::default().score(operator, trip)
}

/// Priority-weighted cost scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostScorer {
    /// Multiplier applied to trip priority.
    pub priority_weight: f64,
}

impl CostScorer {
    /// Creates a scorer with the given priority weight.
    pub fn new(priority_weight: f64) -> Self {
        Self { priority_weight }
    }

    /// Scores `operator` for `trip`. Lower = better.
    #[inline]
    pub fn score(&self, operator: &Operator, trip: &Trip) -> CandidateScore {
        trip.priority as f64 * self.priority_weight + self.trip_cost(operator, trip)
    }

    /// Direct labour cost of `operator` driving `trip`.
    #[inline]
    pub fn trip_cost(&self, operator: &Operator, trip: &Trip) -> f64 {
        operator.cost_per_hour * trip.duration_hours
    }
}

impl Default for CostScorer {
    fn default() -> Self {
        Self::new(DEFAULT_PRIORITY_WEIGHT)
    }
}
