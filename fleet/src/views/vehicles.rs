use crate::api::HttpClient;
use crate::model::{status_list_label, MaintenanceRecord, Snapshot, Vehicle, VehicleStatus};
use anyhow::Context;
use commons::log::info;

/// Client-side filter for the vehicle list. Blank values match everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VehicleFilter {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

impl VehicleFilter {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        if let Some(status) = non_blank(&self.status) {
            if vehicle.status != status {
                return false;
            }
        }
        if let Some(category) = non_blank(&self.category) {
            if vehicle.category.as_deref() != Some(category) {
                return false;
            }
        }
        match non_blank(&self.search) {
            Some(term) => vehicle.matches_search(term),
            None => true,
        }
    }
}

fn title(make: &str, model: &str, year: Option<u32>) -> String {
    match year {
        Some(year) => format!("{} {} ({})", make, model, year),
        None => format!("{} {}", make, model),
    }
}

/// `2024-03-01T10:00:00Z` -> `2024-03-01`
fn date_of(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

fn or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

fn measure(value: Option<f64>, unit: &str) -> String {
    value
        .map(|value| format!("{}{}", value, unit))
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn format_vehicle_list(vehicles: &[Vehicle]) -> Vec<String> {
    let mut out = vec!["Fleet Vehicles".to_string()];
    if vehicles.is_empty() {
        out.push("No vehicles found. Please adjust your filters or add new vehicles.".to_string());
        return out;
    }
    for vehicle in vehicles {
        out.push(format!(
            "{} [{}]",
            title(&vehicle.make, &vehicle.model, vehicle.year),
            status_list_label(&vehicle.status)
        ));
        out.push(format!("  ID: {}", vehicle.vehicle_id));
        out.push(format!("  License: {}", vehicle.license_plate));
        out.push(format!("  VIN: {}", or(&vehicle.vin, "")));
        if let Some(driver) = &vehicle.assigned_driver {
            out.push(format!("  Driver: {}", driver));
        }
        if let Some(fuel_type) = &vehicle.fuel_type {
            out.push(format!("  Fuel: {}", fuel_type));
        }
        if let Some(device_id) = &vehicle.device_id {
            out.push(format!("  Device ID: {}", device_id));
        }
    }
    out
}

pub async fn vehicles(api: &HttpClient, filter: &VehicleFilter) -> anyhow::Result<Vec<String>> {
    let vehicles = api
        .vehicles()
        .await
        .context("Failed to load vehicles. Please try again later.")?;
    let total = vehicles.len();
    let shown = vehicles
        .into_iter()
        .filter(|vehicle| filter.matches(vehicle))
        .collect::<Vec<_>>();
    info!("Showing {} of {} vehicles", shown.len(), total);
    Ok(format_vehicle_list(&shown))
}

pub fn format_vehicle_detail(
    vehicle: &Vehicle,
    records: &[MaintenanceRecord],
    telemetry: Option<&Snapshot>,
) -> Vec<String> {
    let mut out = vec![
        title(&vehicle.make, &vehicle.model, vehicle.year),
        format!("ID: {}", vehicle.vehicle_id),
        format!("Current Status: {}", vehicle.status),
        String::new(),
        "Vehicle Info".to_string(),
        format!("  License Plate: {}", vehicle.license_plate),
        format!("  VIN: {}", or(&vehicle.vin, "")),
        format!("  Category: {}", or(&vehicle.category, "Not specified")),
        format!("  Fuel Type: {}", or(&vehicle.fuel_type, "Not specified")),
        format!("  Driver: {}", or(&vehicle.assigned_driver, "None")),
        format!("  IoT Device: {}", or(&vehicle.device_id, "Not installed")),
    ];
    if let Some(created_at) = &vehicle.created_at {
        out.push(format!("  Added: {}", date_of(created_at)));
    }
    if let Some(updated_at) = &vehicle.updated_at {
        out.push(format!("  Updated: {}", date_of(updated_at)));
    }

    if let Some(snapshot) = telemetry {
        let (latitude, longitude) = snapshot.position();
        out.push(String::new());
        out.push("Telemetry".to_string());
        out.push(format!("  Updated: {}", or(&snapshot.timestamp, "N/A")));
        out.push(format!("  Location: {}, {}", latitude, longitude));
        out.push(format!("  Speed: {}", measure(snapshot.speed, " km/h")));
        out.push(format!("  Fuel: {}", measure(snapshot.fuel_level, "%")));
        out.push(format!("  Engine: {}", or(&snapshot.engine_status, "N/A")));
        out.push(format!("  Battery: {}", measure(snapshot.battery_voltage, "V")));
        out.push(format!("  Odometer: {}", measure(snapshot.odometer, " km")));
        out.push(format!("  Temp: {}", measure(snapshot.engine_temp, "°C")));
    }

    out.push(String::new());
    out.push("Maintenance History".to_string());
    if records.is_empty() {
        out.push("  No maintenance records found.".to_string());
    }
    for record in records.iter().take(3) {
        out.push(format!(
            "  {} | {} | {} | ${:.2}",
            record.date.as_deref().map(date_of).unwrap_or("N/A"),
            or(&record.kind, ""),
            or(&record.description, ""),
            record.cost.unwrap_or(0.0)
        ));
    }
    out
}

pub async fn vehicle(api: &HttpClient, vehicle_id: &str) -> anyhow::Result<Vec<String>> {
    let failed = "Failed to load vehicle data. Please try again later.";
    let vehicle = api.vehicle(vehicle_id).await.context(failed)?;
    let records = api.maintenance_records(vehicle_id).await.context(failed)?;
    let telemetry = match api.vehicle_telemetry(vehicle_id).await {
        Ok(snapshots) => snapshots.into_iter().next(),
        Err(err) => {
            info!("No telemetry data available: {}", err);
            None
        }
    };
    Ok(format_vehicle_detail(&vehicle, &records, telemetry.as_ref()))
}

pub async fn set_status(
    api: &HttpClient,
    vehicle_id: &str,
    status: VehicleStatus,
) -> anyhow::Result<Vec<String>> {
    api.update_vehicle_status(vehicle_id, status)
        .await
        .context("Failed to update vehicle status. Please try again.")?;
    Ok(vec![format!("Vehicle status updated to {}", status)])
}

pub async fn delete_vehicle(api: &HttpClient, vehicle_id: &str) -> anyhow::Result<Vec<String>> {
    api.delete_vehicle(vehicle_id)
        .await
        .context("Failed to delete vehicle. Please try again.")?;
    Ok(vec!["Vehicle deleted successfully".to_string()])
}
