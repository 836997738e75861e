use crate::model::{Snapshot, VehicleStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerIcon {
    pub image: &'static str,
    pub size: (u32, u32),
    pub anchor: (i32, i32),
    pub popup_anchor: (i32, i32),
}

const ACTIVE_ICON: MarkerIcon = MarkerIcon {
    image: "green-car.png",
    size: (40, 35),
    anchor: (12, 41),
    popup_anchor: (1, -34),
};

const MAINTENANCE_ICON: MarkerIcon = MarkerIcon {
    image: "yellow-car.png",
    size: (34, 30),
    anchor: (12, 41),
    popup_anchor: (1, -34),
};

const INACTIVE_ICON: MarkerIcon = MarkerIcon {
    image: "red-car.png",
    size: (35, 30),
    anchor: (12, 41),
    popup_anchor: (1, -34),
};

impl MarkerIcon {
    pub fn of(status: VehicleStatus) -> MarkerIcon {
        match status {
            VehicleStatus::Active => ACTIVE_ICON,
            VehicleStatus::Maintenance => MAINTENANCE_ICON,
            VehicleStatus::Inactive => INACTIVE_ICON,
        }
    }

    /// Missing and unknown statuses are drawn as inactive.
    pub fn for_snapshot(snapshot: &Snapshot) -> MarkerIcon {
        MarkerIcon::of(
            snapshot
                .vehicle_status()
                .unwrap_or(VehicleStatus::Inactive),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub vehicle_id: Option<String>,
    pub position: (f64, f64),
    pub icon: MarkerIcon,
    pub popup: Vec<String>,
}

impl Marker {
    pub fn new(snapshot: &Snapshot) -> Marker {
        Marker {
            vehicle_id: snapshot.vehicle_id.clone(),
            position: snapshot.position(),
            icon: MarkerIcon::for_snapshot(snapshot),
            popup: popup(snapshot),
        }
    }
}

fn one_decimal(value: Option<f64>) -> String {
    value
        .map(|value| format!("{:.1}", value))
        .unwrap_or_else(|| "N/A".to_string())
}

fn popup(snapshot: &Snapshot) -> Vec<String> {
    let status = snapshot
        .vehicle
        .as_ref()
        .and_then(|vehicle| vehicle.status.as_deref());
    vec![
        format!(
            "{} {}",
            snapshot.make().unwrap_or("Unknown"),
            snapshot.model().unwrap_or("")
        )
        .trim_end()
        .to_string(),
        format!("Speed: {} km/h", one_decimal(snapshot.speed)),
        format!("Fuel: {}%", one_decimal(snapshot.fuel_level)),
        format!("Odometer: {} km", one_decimal(snapshot.odometer)),
        format!(
            "Engine: {}",
            snapshot.engine_status.as_deref().unwrap_or("N/A")
        ),
        format!("Status: {}", status.unwrap_or("Unknown")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, VehicleSummary};

    #[test]
    fn snapshot_without_status_gets_inactive_icon() {
        // Given
        let without_vehicle = Snapshot::default();
        let without_status = Snapshot {
            vehicle: Some(VehicleSummary {
                make: Some("Tata".to_string()),
                ..VehicleSummary::default()
            }),
            ..Snapshot::default()
        };

        // Then
        assert_eq!(MarkerIcon::for_snapshot(&without_vehicle), INACTIVE_ICON);
        assert_eq!(MarkerIcon::for_snapshot(&without_status), INACTIVE_ICON);
    }

    #[test]
    fn unknown_status_gets_inactive_icon() {
        let snapshot = Snapshot {
            vehicle: Some(VehicleSummary {
                status: Some("towed".to_string()),
                ..VehicleSummary::default()
            }),
            ..Snapshot::default()
        };

        assert_eq!(MarkerIcon::for_snapshot(&snapshot).image, "red-car.png");
    }

    #[test]
    fn icon_sizes_by_status() {
        assert_eq!(MarkerIcon::of(VehicleStatus::Active).size, (40, 35));
        assert_eq!(MarkerIcon::of(VehicleStatus::Maintenance).size, (34, 30));
        assert_eq!(MarkerIcon::of(VehicleStatus::Inactive).size, (35, 30));
    }

    #[test]
    fn popup_of_full_snapshot() {
        // Given
        let snapshot = Snapshot {
            vehicle_id: Some("V-1".to_string()),
            location: Some(Location {
                latitude: Some(13.08),
                longitude: Some(80.27),
            }),
            speed: Some(42.26),
            fuel_level: Some(63.0),
            odometer: Some(12034.44),
            engine_status: Some("running".to_string()),
            vehicle: Some(VehicleSummary {
                status: Some("Active".to_string()),
                make: Some("Tata".to_string()),
                model: Some("Nexon".to_string()),
            }),
            ..Snapshot::default()
        };

        // When
        let marker = Marker::new(&snapshot);

        // Then
        assert_eq!(marker.position, (13.08, 80.27));
        assert_eq!(marker.icon, ACTIVE_ICON);
        assert_eq!(
            marker.popup,
            vec![
                "Tata Nexon",
                "Speed: 42.3 km/h",
                "Fuel: 63.0%",
                "Odometer: 12034.4 km",
                "Engine: running",
                "Status: Active",
            ]
        );
    }

    #[test]
    fn popup_of_empty_snapshot() {
        let marker = Marker::new(&Snapshot::default());

        assert_eq!(marker.position, (0.0, 0.0));
        assert_eq!(
            marker.popup,
            vec![
                "Unknown",
                "Speed: N/A km/h",
                "Fuel: N/A%",
                "Odometer: N/A km",
                "Engine: N/A",
                "Status: Unknown",
            ]
        );
    }
}
