use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaintenanceRecord {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub date: Option<String>,
    pub engine_health: Option<f64>,
    pub oil_quality: Option<f64>,
    pub tire_wear: Option<f64>,
    pub maintenance_quality_score: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenanceRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub cost: f64,
    pub maintenance_interval: u32,
    pub engine_health: f64,
    pub oil_quality: f64,
    pub tire_wear: f64,
    pub maintenance_quality_score: f64,
}
