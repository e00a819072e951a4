use crate::core::{AvailabilityPolicy, Bike, ConfigProvider, StationState};
use crate::utils::error::{Result, StationError};

const DEFAULT_NAME: &str = "station";

/// A docking station with a single slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockingStation {
    name: String,
    policy: AvailabilityPolicy,
    docked_bike: Option<Bike>,
}

impl DockingStation {
    pub fn new() -> Self {
        Self::with_policy(AvailabilityPolicy::default())
    }

    pub fn with_policy(policy: AvailabilityPolicy) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            policy,
            docked_bike: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            name: config.station_name().to_string(),
            policy: config.availability_policy(),
            docked_bike: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> AvailabilityPolicy {
        self.policy
    }

    pub fn state(&self) -> StationState {
        match self.docked_bike {
            Some(_) => StationState::Occupied,
            None => StationState::Empty,
        }
    }

    /// Hands out a new working bike. The slot is left untouched, so a station
    /// can release any number of bikes.
    pub fn release_bike(&self) -> Bike {
        tracing::debug!("🚲 {} released a bike", self.name);
        Bike::new()
    }

    /// Stores `bike` in the slot, replacing whatever was there.
    pub fn dock_bike(&mut self, bike: Bike) -> &Bike {
        if let Some(previous) = self.docked_bike.take() {
            tracing::debug!(
                "{} replaced a docked bike (working: {})",
                self.name,
                previous.is_working()
            );
        }
        tracing::debug!("🔒 {} docked a bike (working: {})", self.name, bike.is_working());
        self.docked_bike.insert(bike)
    }

    pub fn see_bike(&self) -> Option<&Bike> {
        self.docked_bike.as_ref()
    }

    pub fn see_bike_mut(&mut self) -> Option<&mut Bike> {
        self.docked_bike.as_mut()
    }

    pub fn check_availability(&self) -> Result<&Bike> {
        match self.policy {
            AvailabilityPolicy::AlwaysUnavailable => Err(StationError::Unavailable),
            AvailabilityPolicy::Occupancy => self
                .docked_bike
                .as_ref()
                .filter(|bike| bike.is_working())
                .ok_or(StationError::Unavailable),
        }
    }
}

impl Default for DockingStation {
    fn default() -> Self {
        Self::new()
    }
}
