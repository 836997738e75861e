use crate::map::{legend, LegendEntry, MapView};
use crate::model::VehicleStatus;
use crate::traits::{DrawDashboard, WithPaths, WithTelemetry};
use commons::log::debug;

pub struct MapArtist<T> {
    cx: T,
    view: MapView,
}

impl<T> MapArtist<T>
where
    T: DrawDashboard + WithPaths + WithTelemetry + Send + Sync,
{
    pub fn new(cx: T, view: MapView) -> MapArtist<T> {
        MapArtist { cx, view }
    }

    pub async fn redraw(&mut self) {
        let snapshots = self.cx.with_telemetry(|snapshots| snapshots.to_vec()).await;
        let view = &self.view;
        let layer = self
            .cx
            .with_paths(|paths| view.render(&snapshots, paths))
            .await;
        debug!(
            "Drawing {} markers and {} paths",
            layer.markers.len(),
            layer.polylines.len()
        );
        self.cx.draw_map(&layer);
    }

    pub async fn toggle_status(&mut self, status: VehicleStatus) {
        self.view.toggle_status(status);
        self.redraw().await;
    }

    pub async fn select_path(&mut self, vehicle_id: String) -> bool {
        let view = &mut self.view;
        let selected = self
            .cx
            .with_paths(|paths| view.select_path(&vehicle_id, paths))
            .await;
        if selected {
            self.redraw().await;
        }
        selected
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        legend(self.view.filter())
    }
}
