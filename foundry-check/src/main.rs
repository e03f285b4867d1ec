//! Foundry unit system check
//!
//! Applies each unit system, validates its base units and a few metric
//! reference conversions, and prints a JSON report to stdout.
//!
//! Environment:
//! - FOUNDRY_UNIT_SYSTEM: check only this system (IPS, FPS, MKS, CGS, mmNs)
//! - FOUNDRY_PIXELS_PER_METER: pixel scale applied to every checked system
//! - FOUNDRY_LOG: log level on stderr (error, warn, info, debug, trace)

mod report;

use std::env;
use std::process::ExitCode;
use foundry_units::{UnitSystemConfig, UnitSystemType, ENV_UNIT_SYSTEM};
use tracing::{error, info, Level};

const LOG_ENV: &str = "FOUNDRY_LOG";

fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|raw| raw.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let config = match UnitSystemConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::from(2);
        }
    };

    let systems: Vec<UnitSystemType> = if env::var(ENV_UNIT_SYSTEM).is_ok() {
        vec![config.system]
    } else {
        UnitSystemType::ALL.to_vec()
    };

    info!(systems = systems.len(), "checking unit systems");
    let report = report::run(&systems, config.pixels_per_meter);

    match report.to_json() {
        Ok(json) => println!("{}", json),
        Err(err) => {
            error!("{}", err);
            return ExitCode::from(2);
        }
    }

    if report.passed {
        ExitCode::SUCCESS
    } else {
        error!("unit system check failed");
        ExitCode::FAILURE
    }
}
