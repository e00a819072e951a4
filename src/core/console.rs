use serde::Serialize;
use std::str::FromStr;

use crate::core::station::DockingStation;
use crate::core::Bike;
use crate::utils::error::{Result, StationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Release,
    Dock { working: bool },
    See,
    Check,
    ReportBroken,
}

impl FromStr for Command {
    type Err = StationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "release" => Ok(Command::Release),
            "dock" => Ok(Command::Dock { working: true }),
            "dock:broken" => Ok(Command::Dock { working: false }),
            "see" => Ok(Command::See),
            "check" => Ok(Command::Check),
            "break" => Ok(Command::ReportBroken),
            _ => Err(StationError::InvalidCommand {
                input: s.to_string(),
            }),
        }
    }
}

pub fn parse_commands<I, S>(inputs: I) -> Result<Vec<Command>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs.into_iter().map(|input| input.as_ref().parse()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Released { bike: Bike },
    Docked { bike: Bike },
    Seen { bike: Option<Bike> },
    Available { bike: Bike },
    Unavailable { message: String },
    Broken { bike: Option<Bike> },
}

/// Drives a station through a list of commands, recording what each one did.
pub struct StationConsole {
    station: DockingStation,
}

impl StationConsole {
    pub fn new(station: DockingStation) -> Self {
        Self { station }
    }

    pub fn station(&self) -> &DockingStation {
        &self.station
    }

    pub fn into_station(self) -> DockingStation {
        self.station
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        match command {
            Command::Release => Outcome::Released {
                bike: self.station.release_bike(),
            },
            Command::Dock { working } => {
                let bike = if working { Bike::new() } else { Bike::broken() };
                Outcome::Docked {
                    bike: *self.station.dock_bike(bike),
                }
            }
            Command::See => Outcome::Seen {
                bike: self.station.see_bike().copied(),
            },
            Command::Check => match self.station.check_availability() {
                Ok(bike) => Outcome::Available { bike: *bike },
                Err(e) => {
                    tracing::warn!("⚠️ {}: {}", self.station.name(), e);
                    Outcome::Unavailable {
                        message: e.to_string(),
                    }
                }
            },
            Command::ReportBroken => {
                let bike = self.station.see_bike_mut().map(|bike| {
                    bike.report_broken();
                    *bike
                });
                if bike.is_none() {
                    tracing::debug!("{} has no docked bike to report", self.station.name());
                }
                Outcome::Broken { bike }
            }
        }
    }

    pub fn run(&mut self, commands: &[Command]) -> Vec<Outcome> {
        tracing::info!(
            "Running {} command(s) on {} (policy: {})",
            commands.len(),
            self.station.name(),
            self.station.policy()
        );

        let outcomes: Vec<Outcome> = commands.iter().map(|c| self.execute(*c)).collect();

        let unavailable = outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Unavailable { .. }))
            .count();
        tracing::info!(
            "Finished {} command(s), {} unavailable",
            outcomes.len(),
            unavailable
        );

        outcomes
    }
}
