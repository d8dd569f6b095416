//! Transport unit model.

use serde::{Deserialize, Serialize};

/// A transport unit (truck, tractor, van) that trips are bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique unit identifier.
    pub id: String,
    /// Unit category (e.g., "Torton", "Tracto"). `None` = unknown.
    #[serde(default)]
    pub unit_type: Option<String>,
    /// License class required to operate this unit.
    pub required_license: String,
    /// Home base the unit is stationed at.
    pub home_base: String,
    /// Whether the unit is in service.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Unit {
    /// Creates an active unit of unknown type.
    pub fn new(
        id: impl Into<String>,
        required_license: impl Into<String>,
        home_base: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            unit_type: None,
            required_license: required_license.into(),
            home_base: home_base.into(),
            active: true,
        }
    }

    /// Sets the unit type.
    pub fn with_type(mut self, unit_type: impl Into<String>) -> Self {
        self.unit_type = Some(unit_type.into());
        self
    }

    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Marks the unit out of service.
    pub fn inactive(self) -> Self {
        self.with_active(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_builder() {
        let u = Unit::new("U01", "B", "Veracruz").with_type("Torton");
        assert_eq!(u.id, "U01");
        assert_eq!(u.unit_type.as_deref(), Some("Torton"));
        assert_eq!(u.required_license, "B");
        assert_eq!(u.home_base, "Veracruz");
        assert!(u.active);
    }

    #[test]
    fn test_unit_inactive() {
        let u = Unit::new("U01", "B", "Veracruz").inactive();
        assert!(!u.active);
        assert!(u.unit_type.is_none());
    }
}
