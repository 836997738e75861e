mod actors;
mod api;
mod args;
mod artists;
mod map;
mod model;
mod parameters;
mod services;
mod system;
mod traits;
mod views;

use crate::actors::stdin_lines;
use crate::api::HttpClient;
use crate::args::{Args, Command};
use crate::model::NewMaintenanceRecord;
use crate::parameters::Parameters;
use crate::system::System;
use crate::views::VehicleFilter;

use clap::Parser;
use commons::log::debug;
use simple_logger::SimpleLogger;
use std::convert::TryFrom;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let parameters = match Parameters::try_from(&args) {
        Ok(parameters) => parameters,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    SimpleLogger::new()
        .with_level(parameters.log_level)
        .init()
        .unwrap();
    debug!("{:?}", parameters);

    match run(args.command(), parameters).await {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, parameters: Parameters) -> anyhow::Result<Vec<String>> {
    let api = HttpClient::new(&parameters.base_url, parameters.request_timeout)?;
    match command {
        Command::Map => {
            System::new(parameters, api, stdin_lines()).run().await;
            Ok(vec![])
        }
        Command::Vehicles {
            status,
            category,
            search,
        } => {
            let filter = VehicleFilter {
                status,
                category,
                search,
            };
            views::vehicles(&api, &filter).await
        }
        Command::Vehicle { id } => views::vehicle(&api, &id).await,
        Command::SetStatus { id, status } => views::set_status(&api, &id, status).await,
        Command::DeleteVehicle { id } => views::delete_vehicle(&api, &id).await,
        Command::Maintenance { id } => views::maintenance_records(&api, &id).await,
        Command::AddMaintenance {
            id,
            kind,
            description,
            cost,
            interval,
            engine_health,
            oil_quality,
            tire_wear,
            quality_score,
        } => {
            let record = NewMaintenanceRecord {
                kind,
                description,
                cost,
                maintenance_interval: interval,
                engine_health,
                oil_quality,
                tire_wear,
                maintenance_quality_score: quality_score,
            };
            views::add_maintenance_record(&api, &id, &record).await
        }
        Command::TopRisk => views::top_risk(&api).await,
        Command::Strategy { vehicle_id } => views::strategy(&api, &vehicle_id).await,
        Command::Alerts => views::alerts(&api).await,
        Command::Resolve { alert_id, by, note } => views::resolve(&api, &alert_id, &by, &note).await,
        Command::Diagnostics => views::diagnostics(&api).await,
    }
}
