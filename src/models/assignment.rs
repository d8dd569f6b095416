//! Assignment (outcome) model.
//!
//! One assignment record is produced per input trip: either a successful
//! operator binding or a tagged reason why no operator could be given.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification of an assignment outcome.
///
/// The string keys returned by [`AssignmentReason::as_str`] are stable and
/// may be used by callers as opaque classification keys. Serialized form
/// uses the same keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssignmentReason {
    /// An operator was assigned.
    #[serde(rename = "ok")]
    Ok,
    /// The trip references a unit id missing from the unit map.
    #[serde(rename = "unit does not exist")]
    UnitNotFound,
    /// The referenced unit exists but is out of service.
    #[serde(rename = "unit inactive")]
    UnitInactive,
    /// No remaining operator satisfies the active policy.
    #[serde(rename = "no eligible operator")]
    NoEligibleOperator,
}

impl AssignmentReason {
    /// All reasons, in declaration order.
    pub const ALL: [AssignmentReason; 4] = [
        AssignmentReason::Ok,
        AssignmentReason::UnitNotFound,
        AssignmentReason::UnitInactive,
        AssignmentReason::NoEligibleOperator,
    ];

    /// Stable classification key.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentReason::Ok => "ok",
            AssignmentReason::UnitNotFound => "unit does not exist",
            AssignmentReason::UnitInactive => "unit inactive",
            AssignmentReason::NoEligibleOperator => "no eligible operator",
        }
    }

    /// Whether this reason denotes a successful assignment.
    pub fn is_ok(&self) -> bool {
        matches!(self, AssignmentReason::Ok)
    }
}

impl fmt::Display for AssignmentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure half of [`AssignmentReason`]: why a trip got no operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnassignedReason {
    /// See [`AssignmentReason::UnitNotFound`].
    UnitNotFound,
    /// See [`AssignmentReason::UnitInactive`].
    UnitInactive,
    /// See [`AssignmentReason::NoEligibleOperator`].
    NoEligibleOperator,
}

impl From<UnassignedReason> for AssignmentReason {
    fn from(reason: UnassignedReason) -> Self {
        match reason {
            UnassignedReason::UnitNotFound => AssignmentReason::UnitNotFound,
            UnassignedReason::UnitInactive => AssignmentReason::UnitInactive,
            UnassignedReason::NoEligibleOperator => AssignmentReason::NoEligibleOperator,
        }
    }
}

/// Errors rebuilding an [`Assignment`] from external data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// Operator presence disagrees with the reason.
    #[error("trip '{trip_id}': reason '{reason}' disagrees with operator presence ({has_operator})")]
    InconsistentReason {
        trip_id: String,
        reason: AssignmentReason,
        has_operator: bool,
    },
}

/// A trip-operator assignment outcome.
///
/// `operator_id` is `Some` exactly when `reason` is [`AssignmentReason::Ok`].
/// Use [`Assignment::assigned`] and [`Assignment::unassigned`] to keep the
/// two consistent; deserialization rejects records that break it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAssignment")]
pub struct Assignment {
    /// Trip this record answers for.
    pub trip_id: String,
    /// Unit the trip is bound to.
    pub unit_id: String,
    /// Assigned operator, if any.
    pub operator_id: Option<String>,
    /// Outcome classification.
    pub reason: AssignmentReason,
}

impl Assignment {
    /// Creates a successful assignment.
    pub fn assigned(
        trip_id: impl Into<String>,
        unit_id: impl Into<String>,
        operator_id: impl Into<String>,
    ) -> Self {
        Self {
            trip_id: trip_id.into(),
            unit_id: unit_id.into(),
            operator_id: Some(operator_id.into()),
            reason: AssignmentReason::Ok,
        }
    }

    /// Creates a non-assignment with the given failure reason.
    pub fn unassigned(
        trip_id: impl Into<String>,
        unit_id: impl Into<String>,
        reason: UnassignedReason,
    ) -> Self {
        Self {
            trip_id: trip_id.into(),
            unit_id: unit_id.into(),
            operator_id: None,
            reason: reason.into(),
        }
    }

    /// Whether an operator was assigned.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.operator_id.is_some()
    }
}

#[derive(Deserialize)]
struct RawAssignment {
    trip_id: String,
    unit_id: String,
    #[serde(default)]
    operator_id: Option<String>,
    reason: AssignmentReason,
}

impl TryFrom<RawAssignment> for Assignment {
    type Error = AssignmentError;

    fn try_from(raw: RawAssignment) -> Result<Self, Self::Error> {
        let has_operator = raw.operator_id.is_some();
        if has_operator != raw.reason.is_ok() {
            return Err(AssignmentError::InconsistentReason {
                trip_id: raw.trip_id,
                reason: raw.reason,
                has_operator,
            });
        }
        Ok(Self {
            trip_id: raw.trip_id,
            unit_id: raw.unit_id,
            operator_id: raw.operator_id,
            reason: raw.reason,
        })
    }
}
