use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Alert {
    #[serde(rename = "_id")]
    pub id: String,
    pub vehicle_id: Option<String>,
    pub alert_type: Option<String>,
    pub message: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AlertCount {
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub resolved_by: String,
    pub resolution_note: String,
}

impl Resolution {
    /// Trims both fields and rejects either being blank.
    pub fn new(resolved_by: &str, resolution_note: &str) -> Result<Resolution, &'static str> {
        let resolved_by = resolved_by.trim();
        let resolution_note = resolution_note.trim();
        if resolved_by.is_empty() || resolution_note.is_empty() {
            return Err("Please fill in both fields.");
        }
        Ok(Resolution {
            resolved_by: resolved_by.to_string(),
            resolution_note: resolution_note.to_string(),
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiagnosticsRun {
    pub total_alerts: u64,
}
