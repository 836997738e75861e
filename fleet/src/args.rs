use crate::model::VehicleStatus;
use clap::{Parser, Subcommand};
use commons::log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fleet", about = "Fleet monitoring dashboard")]
pub struct Args {
    /// JSON file of parameters
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Use dark map tiles
    #[arg(long, global = true)]
    pub dark: bool,

    #[arg(long, global = true)]
    pub log_level: Option<LevelFilter>,

    /// Runs the live map when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Live map with console controls
    Map,
    /// List vehicles
    Vehicles {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Matches id, make, model, licence plate or driver
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one vehicle with maintenance and telemetry
    Vehicle { id: String },
    SetStatus { id: String, status: VehicleStatus },
    DeleteVehicle { id: String },
    /// List maintenance records of a vehicle
    Maintenance { id: String },
    AddMaintenance {
        id: String,
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        cost: f64,
        /// Days until the next service
        #[arg(long)]
        interval: u32,
        #[arg(long)]
        engine_health: f64,
        #[arg(long)]
        oil_quality: f64,
        #[arg(long)]
        tire_wear: f64,
        #[arg(long)]
        quality_score: f64,
    },
    /// High risk vehicles
    TopRisk,
    /// Latest strategy recommendation for a vehicle
    Strategy { vehicle_id: String },
    /// Active alert count and list
    Alerts,
    Resolve {
        alert_id: String,
        #[arg(long)]
        by: String,
        #[arg(long)]
        note: String,
    },
    /// Run diagnostics on the server
    Diagnostics,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Map)
    }
}
