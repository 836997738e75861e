use crate::map::{LegendEntry, MapLayer};
use crate::model::{Alert, Vehicle};
use commons::log::warn;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub fn format_map(layer: &MapLayer) -> Vec<String> {
    let mut out = vec![format!(
        "== Fleet map: {} vehicles, {} paths (centre {:.4}, {:.4}, zoom {}) ==",
        layer.markers.len(),
        layer.polylines.len(),
        layer.base.center.latitude,
        layer.base.center.longitude,
        layer.base.zoom
    )];
    for marker in layer.markers.iter() {
        out.push(format!(
            "[{}] {} @ {:.4}, {:.4} | {}",
            marker.icon.image,
            marker.vehicle_id.as_deref().unwrap_or("?"),
            marker.position.0,
            marker.position.1,
            marker.popup.join(" | ")
        ));
    }
    for polyline in layer.polylines.iter() {
        out.push(format!(
            "~ path {} ({} points) {} dash {}",
            polyline.vehicle_id,
            polyline.points.len(),
            polyline.colour,
            polyline.dash
        ));
    }
    for annotation in layer.annotations.iter() {
        out.push(format!(
            "* {} of {}: {}",
            annotation.endpoint.title(),
            annotation.vehicle_id,
            annotation.coordinates()
        ));
    }
    out
}

pub fn format_legend(legend: &[LegendEntry]) -> Vec<String> {
    let mut out = vec!["Vehicle Status Legend".to_string()];
    for entry in legend {
        out.push(format!(
            "{} {} ({})",
            if entry.selected { "[x]" } else { "[ ]" },
            entry.label,
            entry.icon.image
        ));
    }
    out
}

pub fn format_badge(count: u64) -> Option<String> {
    if count > 0 {
        Some(format!("Alerts: {}", count))
    } else {
        None
    }
}

pub fn format_alert_panel(alerts: &[Alert]) -> Vec<String> {
    if alerts.is_empty() {
        return vec!["No active alerts".to_string()];
    }
    alerts
        .iter()
        .enumerate()
        .map(|(index, alert)| {
            format!(
                "{}. {}: {} (Severity: {})",
                index + 1,
                alert.alert_type.as_deref().unwrap_or("Alert"),
                alert.message.as_deref().unwrap_or(""),
                alert.severity.as_deref().unwrap_or("unknown")
            )
        })
        .collect()
}

pub fn format_alert_details(alert: &Alert, vehicle: Option<&Vehicle>) -> Vec<String> {
    let mut out = vec![
        "Resolve Alert".to_string(),
        format!("  Type: {}", alert.alert_type.as_deref().unwrap_or("")),
        format!("  Severity: {}", alert.severity.as_deref().unwrap_or("")),
        format!("  Message: {}", alert.message.as_deref().unwrap_or("")),
    ];
    if let Some(vehicle) = vehicle {
        out.push("Vehicle Details".to_string());
        out.push(format!("  Make: {}", vehicle.make));
        out.push(format!("  Model: {}", vehicle.model));
        out.push(format!(
            "  Year: {}",
            vehicle.year.map(|year| year.to_string()).unwrap_or_default()
        ));
        out.push(format!("  VIN: {}", vehicle.vin.as_deref().unwrap_or("")));
        out.push(format!("  License Plate: {}", vehicle.license_plate));
    }
    out
}

/// Draws the dashboard as lines of text.
pub struct ConsoleCanvas<W> {
    out: Mutex<W>,
    badge: AtomicU64,
}

impl<W> ConsoleCanvas<W>
where
    W: Write,
{
    pub fn new(out: W) -> ConsoleCanvas<W> {
        ConsoleCanvas {
            out: Mutex::new(out),
            badge: AtomicU64::new(0),
        }
    }

    fn write_lines(&self, lines: &[String]) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        for line in lines {
            if let Err(err) = writeln!(out, "{}", line) {
                warn!("Could not write to console: {}", err);
                return;
            }
        }
        let _ = out.flush();
    }

    pub fn draw_map(&self, layer: &MapLayer) {
        self.write_lines(&format_map(layer));
    }

    pub fn draw_legend(&self, legend: &[LegendEntry]) {
        self.write_lines(&format_legend(legend));
    }

    /// A badge dropping to zero is drawn once as cleared.
    pub fn draw_alert_badge(&self, count: u64) {
        let previous = self.badge.swap(count, Ordering::Relaxed);
        match format_badge(count) {
            Some(badge) => self.write_lines(&[badge]),
            None if previous > 0 => self.write_lines(&["Alerts: cleared".to_string()]),
            None => (),
        }
    }

    pub fn draw_alert_panel(&self, alerts: &[Alert]) {
        self.write_lines(&format_alert_panel(alerts));
    }

    pub fn notify(&self, message: &str) {
        self.write_lines(&[message.to_string()]);
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
