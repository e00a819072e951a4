use crate::config::toml_config::StationConfig;
use crate::core::{AvailabilityPolicy, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "docking-station")]
#[command(about = "Release, dock and inspect bikes at a single-slot docking station")]
pub struct CliConfig {
    /// Path to a TOML station configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Station name, overrides the configuration file
    #[arg(long)]
    pub name: Option<String>,

    /// Availability policy: always_unavailable or occupancy
    #[arg(long)]
    pub policy: Option<AvailabilityPolicy>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Commands to run in order: release, dock, dock:broken, see, check, break
    #[arg(default_value = "check")]
    pub commands: Vec<String>,
}

impl CliConfig {
    /// Loads the configuration file when one is given and applies the
    /// command-line overrides on top.
    pub fn station_config(&self) -> Result<StationConfig> {
        let base = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                StationConfig::from_file(path)?
            }
            None => StationConfig::default(),
        };
        let config = base.with_overrides(self.name.clone(), self.policy);
        config.validate()?;
        match &config.station.description {
            Some(description) => tracing::info!(
                "Station {}: {}",
                config.station_name(),
                description
            ),
            None => tracing::info!("Station {}", config.station_name()),
        }
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
