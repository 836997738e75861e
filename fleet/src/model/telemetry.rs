use crate::model::vehicle::VehicleStatus;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleSummary {
    pub status: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
}

/// Latest telemetry reported for one vehicle. The backend may omit any field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub vehicle_id: Option<String>,
    pub timestamp: Option<String>,
    pub location: Option<Location>,
    pub speed: Option<f64>,
    pub fuel_level: Option<f64>,
    pub odometer: Option<f64>,
    pub engine_status: Option<String>,
    pub battery_voltage: Option<f64>,
    pub engine_temp: Option<f64>,
    pub vehicle: Option<VehicleSummary>,
}

impl Snapshot {
    /// Reported status, lower-cased.
    pub fn status(&self) -> Option<String> {
        self.vehicle
            .as_ref()
            .and_then(|vehicle| vehicle.status.as_ref())
            .map(|status| status.to_lowercase())
    }

    pub fn vehicle_status(&self) -> Option<VehicleStatus> {
        self.status().as_deref().and_then(VehicleStatus::parse)
    }

    pub fn is_active(&self) -> bool {
        self.status().as_deref() == Some(VehicleStatus::Active.as_str())
    }

    /// `(latitude, longitude)` with missing coordinates at 0.
    pub fn position(&self) -> (f64, f64) {
        let location = self.location.as_ref();
        (
            location.and_then(|location| location.latitude).unwrap_or(0.0),
            location.and_then(|location| location.longitude).unwrap_or(0.0),
        )
    }

    pub fn make(&self) -> Option<&str> {
        self.vehicle.as_ref().and_then(|vehicle| vehicle.make.as_deref())
    }

    pub fn model(&self) -> Option<&str> {
        self.vehicle.as_ref().and_then(|vehicle| vehicle.model.as_deref())
    }
}

/// Ids of vehicles reported active, first sighting order, without duplicates.
pub fn active_vehicle_ids(snapshots: &[Snapshot]) -> Vec<String> {
    let mut out: Vec<String> = vec![];
    for snapshot in snapshots.iter().filter(|snapshot| snapshot.is_active()) {
        if let Some(vehicle_id) = &snapshot.vehicle_id {
            if !out.contains(vehicle_id) {
                out.push(vehicle_id.clone());
            }
        }
    }
    out
}
