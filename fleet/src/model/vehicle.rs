use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Inactive,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 3] = [
        VehicleStatus::Active,
        VehicleStatus::Maintenance,
        VehicleStatus::Inactive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::Inactive => "inactive",
        }
    }

    /// Case-insensitive. Unknown statuses are `None`.
    pub fn parse(status: &str) -> Option<VehicleStatus> {
        VehicleStatus::ALL
            .iter()
            .copied()
            .find(|candidate| status.eq_ignore_ascii_case(candidate.as_str()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::Maintenance => "Maintenance",
            VehicleStatus::Inactive => "Inactive",
        }
    }
}

impl Display for VehicleStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<VehicleStatus, String> {
        VehicleStatus::parse(s).ok_or_else(|| {
            format!(
                "Unknown status '{}', expected one of active, maintenance, inactive",
                s
            )
        })
    }
}

/// Label shown in the vehicle list. Statuses the client does not know are shown verbatim.
pub fn status_list_label(status: &str) -> &str {
    match status {
        "active" => "Active",
        "maintenance" => "In Maintenance",
        "inactive" => "Inactive",
        other => other,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub vehicle_id: String,
    pub make: String,
    pub model: String,
    pub year: Option<u32>,
    pub vin: Option<String>,
    pub license_plate: String,
    pub category: Option<String>,
    pub fuel_type: Option<String>,
    pub status: String,
    pub assigned_driver: Option<String>,
    pub device_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Vehicle {
    /// Case-insensitive substring match over the identifying fields.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&term);
        contains(&self.vehicle_id)
            || contains(&self.make)
            || contains(&self.model)
            || contains(&self.license_plate)
            || self.assigned_driver.as_deref().map_or(false, contains)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: VehicleStatus,
}
