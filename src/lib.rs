pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::StationConfig;
pub use core::{
    console::{Command, Outcome, StationConsole},
    station::DockingStation,
};
pub use domain::model::{AvailabilityPolicy, Bike, StationState};
pub use utils::error::{Result, StationError};
