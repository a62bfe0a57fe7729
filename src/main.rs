//! FloodGuard - Command line entry point
//!
//! Loads the scaler and model once, then runs a single command against them.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use floodguard_core::api::{self, AppState, PredictionRequest};
use floodguard_core::config::AppConfig;
use floodguard_core::constants::{APP_NAME, APP_VERSION};
use floodguard_core::logic::features::WeatherObservation;
use floodguard_core::FloodPipeline;

#[derive(Parser, Debug)]
#[command(name = "floodguard", version, about = "Flood risk prediction for Bangladesh districts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict flood risk for one district and month
    Predict {
        #[arg(short, long)]
        district: String,

        /// Calendar month (1-12)
        #[arg(short, long)]
        month: u32,

        #[arg(long, default_value_t = 25.0)]
        max_temp: f64,
        #[arg(long, default_value_t = 15.0)]
        min_temp: f64,
        #[arg(long, default_value_t = 50.0)]
        rainfall: f64,
        #[arg(long, default_value_t = 60.0)]
        humidity: f64,
        #[arg(long, default_value_t = 10.0)]
        wind_speed: f64,
        #[arg(long, default_value_t = 30.0)]
        cloud_coverage: f64,
        #[arg(long, default_value_t = 6.0)]
        sunshine: f64,
        #[arg(long, default_value_t = 100.0)]
        altitude: f64,
    },

    /// Score the historical dataset and write the risk map as GeoJSON
    Score {
        /// Dataset CSV (defaults to the configured path)
        #[arg(short, long)]
        dataset: Option<String>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,

        /// Print high-probability alerts to stderr
        #[arg(long)]
        alerts: bool,
    },

    /// List the districts available for prediction
    Districts,

    /// Record a flood alert subscription
    Subscribe {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        location: String,
    },

    /// Print the model input layout
    Layout,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    log::info!("Starting {} v{}", APP_NAME, APP_VERSION);
    let state = AppState::new(AppConfig::from_env());

    match cli.command {
        Command::Predict {
            district,
            month,
            max_temp,
            min_temp,
            rainfall,
            humidity,
            wind_speed,
            cloud_coverage,
            sunshine,
            altitude,
        } => {
            load_artifacts(&state)?;
            let request = PredictionRequest {
                district,
                month,
                weather: WeatherObservation {
                    max_temp,
                    min_temp,
                    rainfall,
                    relative_humidity: humidity,
                    wind_speed,
                    cloud_coverage,
                    bright_sunshine: sunshine,
                    altitude,
                },
            };
            let response = api::run_prediction(&state, request).map_err(anyhow::Error::msg)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Command::Score {
            dataset,
            output,
            alerts,
        } => {
            load_artifacts(&state)?;
            let map = api::get_risk_map(&state, dataset).map_err(anyhow::Error::msg)?;
            let geojson = serde_json::to_string_pretty(&map.geojson)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, geojson).with_context(|| format!("writing {}", path))?;
                    log::info!("Risk map written to {} ({} points)", path, map.points.len());
                }
                None => println!("{}", geojson),
            }

            if alerts {
                for alert in &map.alerts {
                    eprintln!(
                        "ALERT {} (month {}): {:.2}%",
                        alert.district,
                        alert.month,
                        alert.probability * 100.0
                    );
                }
            }
        }

        Command::Districts => {
            for district in api::list_districts().map_err(anyhow::Error::msg)? {
                println!("{}\t{}\t{}", district.name, district.x, district.y);
            }
        }

        Command::Subscribe { email, location } => {
            let message = format!("Subscribed {} to alerts for {}", email, location);
            api::subscribe(&state, email, location).map_err(anyhow::Error::msg)?;
            println!("{}", message);
            log::debug!("Subscription log: {}", state.subscriptions().path().display());
        }

        Command::Layout => {
            let layout = api::get_layout_info().map_err(anyhow::Error::msg)?;
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
    }

    Ok(())
}

/// Scaler and model must both load; the process exits otherwise
fn load_artifacts(state: &AppState) -> Result<()> {
    let pipeline = match FloodPipeline::load(&state.config) {
        Ok(pipeline) => pipeline,
        Err(e) if e.is_fatal() => {
            log::error!("Cannot serve predictions without scaler and model");
            return Err(e).context("failed to load flood model artifacts");
        }
        Err(e) => return Err(e.into()),
    };
    state.install(pipeline)?;
    Ok(())
}
