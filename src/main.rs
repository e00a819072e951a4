use clap::Parser;
use docking_station::core::console::parse_commands;
use docking_station::utils::error::StationError;
use docking_station::utils::{logger, validation::Validate};
use docking_station::{CliConfig, DockingStation, StationConsole};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting docking-station CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let station_config = match config.station_config() {
        Ok(station_config) => station_config,
        Err(e) => fail(&e),
    };

    let commands = match parse_commands(&config.commands) {
        Ok(commands) => commands,
        Err(e) => fail(&e),
    };

    let mut console = StationConsole::new(DockingStation::from_config(&station_config));
    let outcomes = console.run(&commands);

    for outcome in &outcomes {
        println!("{}", serde_json::to_string(outcome)?);
    }

    Ok(())
}

fn fail(e: &StationError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
