use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::StationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bike {
    working: bool,
}

impl Bike {
    /// A freshly built bike is always working.
    pub fn new() -> Self {
        Self { working: true }
    }

    pub fn broken() -> Self {
        Self { working: false }
    }

    pub fn is_working(&self) -> bool {
        self.working
    }

    pub fn report_broken(&mut self) {
        self.working = false;
    }

    pub fn repair(&mut self) {
        self.working = true;
    }
}

impl Default for Bike {
    fn default() -> Self {
        Self::new()
    }
}

/// How a station answers `check_availability`.
///
/// `AlwaysUnavailable` keeps the historical behaviour where the check fails
/// no matter what is docked. `Occupancy` consults the slot instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum AvailabilityPolicy {
    #[default]
    AlwaysUnavailable,
    Occupancy,
}

impl AvailabilityPolicy {
    pub const VARIANTS: [&'static str; 2] = ["always_unavailable", "occupancy"];

    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityPolicy::AlwaysUnavailable => "always_unavailable",
            AvailabilityPolicy::Occupancy => "occupancy",
        }
    }
}

impl fmt::Display for AvailabilityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvailabilityPolicy {
    type Err = StationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "always_unavailable" | "legacy" => Ok(AvailabilityPolicy::AlwaysUnavailable),
            "occupancy" => Ok(AvailabilityPolicy::Occupancy),
            _ => Err(StationError::InvalidConfigValueError {
                field: "policy".to_string(),
                value: s.to_string(),
                reason: format!("Valid policies: {}", Self::VARIANTS.join(", ")),
            }),
        }
    }
}

impl TryFrom<String> for AvailabilityPolicy {
    type Error = StationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StationState {
    Empty,
    Occupied,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bike_is_working() {
        assert!(Bike::new().is_working());
        assert!(Bike::default().is_working());
        assert!(!Bike::broken().is_working());
    }

    #[test]
    fn test_break_and_repair() {
        let mut bike = Bike::new();
        bike.report_broken();
        assert!(!bike.is_working());
        assert_eq!(bike, Bike::broken());

        bike.repair();
        assert!(bike.is_working());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            "occupancy".parse::<AvailabilityPolicy>().unwrap(),
            AvailabilityPolicy::Occupancy
        );
        assert_eq!(
            "Always-Unavailable".parse::<AvailabilityPolicy>().unwrap(),
            AvailabilityPolicy::AlwaysUnavailable
        );
        assert_eq!(
            "legacy".parse::<AvailabilityPolicy>().unwrap(),
            AvailabilityPolicy::AlwaysUnavailable
        );
        assert!("sometimes".parse::<AvailabilityPolicy>().is_err());
        assert_eq!(AvailabilityPolicy::default().to_string(), "always_unavailable");
    }
}
