use crate::api::HttpClient;
use crate::model::{MaintenanceRecord, NewMaintenanceRecord};
use anyhow::Context;

const HEADER: &str = "Type | Description | Cost ($) | Date | Engine Health | Oil Quality | Tire Wear (%) | Maintenance Quality Score";

fn percent(value: Option<f64>) -> String {
    value
        .map(|value| format!("{}%", value))
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn format_maintenance_records(records: &[MaintenanceRecord]) -> Vec<String> {
    let mut out = vec!["Maintenance Records".to_string()];
    if records.is_empty() {
        out.push("No maintenance records found for this vehicle.".to_string());
        return out;
    }
    out.push(HEADER.to_string());
    out.extend(records.iter().map(|record| {
        format!(
            "{} | {} | {} | {} | {} | {} | {} | {}",
            record.kind.as_deref().unwrap_or(""),
            record.description.as_deref().unwrap_or(""),
            record
                .cost
                .map(|cost| cost.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            record
                .date
                .as_deref()
                .and_then(|date| date.split('T').next())
                .unwrap_or("N/A"),
            percent(record.engine_health),
            percent(record.oil_quality),
            percent(record.tire_wear),
            percent(record.maintenance_quality_score),
        )
    }));
    out
}

pub async fn maintenance_records(
    api: &HttpClient,
    vehicle_id: &str,
) -> anyhow::Result<Vec<String>> {
    let records = api
        .maintenance_records(vehicle_id)
        .await
        .with_context(|| format!("Failed to load maintenance records for {}", vehicle_id))?;
    Ok(format_maintenance_records(&records))
}

pub async fn add_maintenance_record(
    api: &HttpClient,
    vehicle_id: &str,
    record: &NewMaintenanceRecord,
) -> anyhow::Result<Vec<String>> {
    api.add_maintenance_record(vehicle_id, record)
        .await
        .context("Error adding maintenance record")?;
    Ok(vec!["Record added successfully!".to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::api::test_server::serve;
    use std::time::Duration;

    #[test]
    fn no_records() {
        assert_eq!(
            format_maintenance_records(&[]),
            vec![
                "Maintenance Records",
                "No maintenance records found for this vehicle."
            ]
        );
    }

    #[test]
    fn record_row() {
        // Given
        let record = MaintenanceRecord {
            kind: Some("Oil change".to_string()),
            description: Some("Synthetic".to_string()),
            cost: Some(45.5),
            date: Some("2024-03-01T10:00:00.000Z".to_string()),
            engine_health: Some(80.0),
            oil_quality: Some(72.5),
            tire_wear: None,
            maintenance_quality_score: Some(95.0),
            ..MaintenanceRecord::default()
        };

        // When
        let lines = format_maintenance_records(&[record]);

        // Then
        assert_eq!(lines[1], HEADER);
        assert_eq!(
            lines[2],
            "Oil change | Synthetic | 45.5 | 2024-03-01 | 80% | 72.5% | N/A | 95%"
        );
    }

    #[tokio::test]
    async fn add_posts_record() {
        // Given
        let (base_url, requests) =
            serve(vec![("POST /api/maintenance/V1/add", "201 Created", "{}")]).await;
        let api = HttpClient::new(&base_url, Duration::from_secs(5)).unwrap();
        let record = NewMaintenanceRecord {
            kind: "Tyres".to_string(),
            description: "Rotation".to_string(),
            cost: 30.0,
            maintenance_interval: 60,
            engine_health: 90.0,
            oil_quality: 85.0,
            tire_wear: 40.0,
            maintenance_quality_score: 88.0,
        };

        // When
        let lines = add_maintenance_record(&api, "V1", &record).await.unwrap();

        // Then
        assert_eq!(lines, vec!["Record added successfully!"]);
        let requests = requests.lock().unwrap();
        assert!(requests[0].contains(r#""type":"Tyres""#));
        assert!(requests[0].contains(r#""maintenanceInterval":60"#));
    }

    #[tokio::test]
    async fn add_reports_rejection() {
        // Given
        let (base_url, _) = serve(vec![(
            "POST /api/maintenance/V1/add",
            "400 Bad Request",
            "{}",
        )])
        .await;
        let api = HttpClient::new(&base_url, Duration::from_secs(5)).unwrap();
        let record = NewMaintenanceRecord {
            kind: String::new(),
            description: String::new(),
            cost: 0.0,
            maintenance_interval: 0,
            engine_health: 0.0,
            oil_quality: 0.0,
            tire_wear: 0.0,
            maintenance_quality_score: 0.0,
        };

        // When
        let result = add_maintenance_record(&api, "V1", &record).await;

        // Then
        assert!(result.is_err());
    }
}
