use crate::map::{MarkerIcon, StatusFilter};
use crate::model::VehicleStatus;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub status: VehicleStatus,
    pub label: &'static str,
    pub icon: MarkerIcon,
    pub selected: bool,
}

/// One entry per status, in the fixed order active, maintenance, inactive.
pub fn legend(filter: &StatusFilter) -> Vec<LegendEntry> {
    VehicleStatus::ALL
        .iter()
        .map(|status| LegendEntry {
            status: *status,
            label: status.label(),
            icon: MarkerIcon::of(*status),
            selected: filter.contains(*status),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_order_and_labels() {
        let labels: Vec<&str> = legend(&StatusFilter::default())
            .iter()
            .map(|entry| entry.label)
            .collect();

        assert_eq!(labels, vec!["Active", "Maintenance", "Inactive"]);
    }

    #[test]
    fn marks_selected_statuses() {
        // Given
        let mut filter = StatusFilter::default();
        filter.toggle(VehicleStatus::Inactive);

        // When
        let entries = legend(&filter);

        // Then
        let selected: Vec<bool> = entries.iter().map(|entry| entry.selected).collect();
        assert_eq!(selected, vec![false, false, true]);
        assert_eq!(entries[2].icon, MarkerIcon::of(VehicleStatus::Inactive));
    }
}
