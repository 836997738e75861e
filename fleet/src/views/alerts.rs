use crate::api::HttpClient;
use crate::artists::{format_alert_details, format_alert_panel, format_badge};
use crate::model::{Alert, Resolution};
use anyhow::{anyhow, Context};
use commons::log::warn;

pub fn format_alerts(count: u64, alerts: &[Alert]) -> Vec<String> {
    let mut out = vec![format_badge(count).unwrap_or_else(|| "Alerts: 0".to_string())];
    out.extend(format_alert_panel(alerts));
    out
}

/// Badge count and the active alert list, fetched once.
pub async fn alerts(api: &HttpClient) -> anyhow::Result<Vec<String>> {
    let count = api
        .active_alert_count()
        .await
        .context("Failed to fetch alert count")?;
    let alerts = api
        .active_alerts()
        .await
        .context("Failed to fetch active alerts")?;
    Ok(format_alerts(count, &alerts))
}

/// Shows the alert and its vehicle, then marks the alert resolved.
pub async fn resolve(
    api: &HttpClient,
    alert_id: &str,
    resolved_by: &str,
    resolution_note: &str,
) -> anyhow::Result<Vec<String>> {
    let alert = api.alert(alert_id).await.context("Alert not found")?;
    let vehicle = match &alert.vehicle_id {
        Some(vehicle_id) => match api.vehicle(vehicle_id).await {
            Ok(vehicle) => Some(vehicle),
            Err(err) => {
                warn!("Could not load vehicle {} for alert {}: {}", vehicle_id, alert_id, err);
                None
            }
        },
        None => None,
    };
    let mut out = format_alert_details(&alert, vehicle.as_ref());

    let resolution = Resolution::new(resolved_by, resolution_note).map_err(|err| anyhow!(err))?;
    api.resolve_alert(alert_id, &resolution)
        .await
        .context("Failed to resolve alert")?;
    out.push(format!(
        "Alert {} resolved by {}",
        alert_id, resolution.resolved_by
    ));
    Ok(out)
}

pub async fn diagnostics(api: &HttpClient) -> anyhow::Result<Vec<String>> {
    let run = api
        .run_diagnostics()
        .await
        .context("Diagnostics failed")?;
    Ok(vec![format!(
        "Diagnostics completed: {} alerts generated.",
        run.total_alerts
    )])
}
