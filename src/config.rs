//! Assigner configuration.
//!
//! [`AssignerConfig`] selects the eligibility policy and the scoring
//! weight for a planning run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eligibility::PolicyKind;
use crate::scoring::DEFAULT_PRIORITY_WEIGHT;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Priority weight is zero, negative or not finite.
    #[error("priority weight must be finite and positive, got {0}")]
    InvalidPriorityWeight(f64),
}

/// Configuration for the greedy assigner.
///
/// # Defaults
///
/// ```
/// use u_fleet::config::AssignerConfig;
/// use u_fleet::eligibility::PolicyKind;
///
/// let config = AssignerConfig::default();
/// assert_eq!(config.policy, PolicyKind::Basic);
/// assert_eq!(config.priority_weight, 1000.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignerConfig {
    /// Which built-in rule policy to apply.
    pub policy: PolicyKind,

    /// Multiplier applied to trip priority in the score.
    ///
    /// Must stay well above `cost_per_hour * duration_hours` for priority
    /// to dominate cost.
    pub priority_weight: f64,
}

impl Default for AssignerConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::Basic,
            priority_weight: DEFAULT_PRIORITY_WEIGHT,
        }
    }
}

impl AssignerConfig {
    /// Sets the rule policy.
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the priority weight.
    pub fn with_priority_weight(mut self, weight: f64) -> Self {
        self.priority_weight = weight;
        self
    }

    /// Preset: extended policy, default weight.
    pub fn extended() -> Self {
        Self::default().with_policy(PolicyKind::Extended)
    }

    /// Checks that all values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.priority_weight.is_finite() || self.priority_weight <= 0.0 {
            return Err(ConfigError::InvalidPriorityWeight(self.priority_weight));
        }
        Ok(())
    }
}
