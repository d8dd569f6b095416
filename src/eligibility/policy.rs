//! Rule policies: ordered, composable lists of eligibility rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::rules::{
    Availability, BaseMatch, FixedUnitBinding, HoursBudget, LicenseMatch, UnitTypeCapability,
};
use super::EligibilityRule;
use crate::models::{Operator, Trip, Unit};

/// Built-in policy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Availability, license, base, hours.
    #[default]
    Basic,
    /// Basic plus fixed-unit binding and unit-type capability.
    Extended,
}

impl PolicyKind {
    /// Policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Basic => "basic",
            PolicyKind::Extended => "extended",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered conjunction of eligibility rules.
///
/// An operator is eligible when every rule is satisfied. Rules are checked
/// in insertion order and evaluation stops at the first failure, so cheap
/// or highly selective rules belong first.
///
/// # Example
/// ```
/// use u_fleet::eligibility::{EligibilityPolicy, rules};
///
/// let policy = EligibilityPolicy::basic().with_rule(rules::UnitTypeCapability);
/// assert_eq!(policy.len(), 5);
/// ```
#[derive(Clone)]
pub struct EligibilityPolicy {
    name: String,
    rules: Vec<Arc<dyn EligibilityRule>>,
}

impl EligibilityPolicy {
    /// Creates an empty policy. An empty policy admits every operator.
    pub fn new() -> Self {
        Self::named("custom")
    }

    /// Creates an empty policy with a name (used in logs).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Availability, license, base and hours, in that order.
    pub fn basic() -> Self {
        Self::named(PolicyKind::Basic.as_str())
            .with_rule(Availability)
            .with_rule(LicenseMatch)
            .with_rule(BaseMatch)
            .with_rule(HoursBudget)
    }

    /// Fixed-unit binding, availability, unit type, license, base and hours.
    pub fn extended() -> Self {
        Self::named(PolicyKind::Extended.as_str())
            .with_rule(FixedUnitBinding)
            .with_rule(Availability)
            .with_rule(UnitTypeCapability)
            .with_rule(LicenseMatch)
            .with_rule(BaseMatch)
            .with_rule(HoursBudget)
    }

    /// Appends a rule.
    pub fn with_rule<R: EligibilityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Policy name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the policy has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Whether `operator` satisfies every rule for (`unit`, `trip`).
    pub fn is_eligible(&self, operator: &Operator, unit: &Unit, trip: &Trip) -> bool {
        self.rules
            .iter()
            .all(|rule| rule.is_satisfied(operator, unit, trip))
    }

    /// Name of the first rule that rejects `operator`, or `None` if eligible.
    pub fn failing_rule(
        &self,
        operator: &Operator,
        unit: &Unit,
        trip: &Trip,
    ) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| !rule.is_satisfied(operator, unit, trip))
            .map(|rule| rule.name())
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self::basic()
    }
}

impl From<PolicyKind> for EligibilityPolicy {
    fn from(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Basic => Self::basic(),
            PolicyKind::Extended => Self::extended(),
        }
    }
}

impl fmt::Debug for EligibilityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EligibilityPolicy")
            .field("name", &self.name)
            .field("rules", &self.rule_names())
            .finish()
    }
}
