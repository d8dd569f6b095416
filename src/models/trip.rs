//! Trip model.
//!
//! A trip is a scheduled movement already bound to a specific unit. The
//! engine only needs its priority, departure and duration; origin and
//! destination are carried for the caller's benefit.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Default trip priority (1 = urgent, 5 = low).
pub const DEFAULT_PRIORITY: i32 = 3;

/// A scheduled trip that needs an operator.
///
/// # Priority
/// Lower value = more important. Trips are processed in ascending
/// `(priority, departure)` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique trip identifier.
    pub id: String,
    /// Origin location.
    #[serde(default)]
    pub origin: String,
    /// Destination location.
    #[serde(default)]
    pub destination: String,
    /// Scheduled departure (local dispatch time).
    pub departure: NaiveDateTime,
    /// Expected duration in hours.
    #[serde(default)]
    pub duration_hours: f64,
    /// Unit the trip is bound to.
    pub unit_id: String,
    /// Scheduling priority (lower = more important).
    #[serde(default = "default_priority")]
    pub priority: i32,
}

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

impl Trip {
    /// Creates a trip with default priority and zero duration.
    pub fn new(id: impl Into<String>, unit_id: impl Into<String>, departure: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            origin: String::new(),
            destination: String::new(),
            departure,
            duration_hours: 0.0,
            unit_id: unit_id.into(),
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets origin and destination.
    pub fn with_route(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = origin.into();
        self.destination = destination.into();
        self
    }

    /// Sets the expected duration in hours.
    pub fn with_duration_hours(mut self, hours: f64) -> Self {
        self.duration_hours = hours;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Scheduled arrival: departure plus duration, rounded to the second.
    ///
    /// Returns `None` for a negative or non-finite duration, or when the
    /// result falls outside the representable timestamp range.
    pub fn arrival(&self) -> Option<NaiveDateTime> {
        let secs = (self.duration_hours * 3600.0).round();
        if !secs.is_finite() || secs < 0.0 || secs > i64::MAX as f64 {
            return None;
        }
        let delta = TimeDelta::try_seconds(secs as i64)?;
        self.departure.checked_add_signed(delta)
    }
}
