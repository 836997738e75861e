use crate::map::{colour_of, legend, Annotation, Hsl, LegendEntry, Marker, PathSelection, StatusFilter};
use crate::model::{LatLon, PathCache, Snapshot, VehicleStatus};
use std::collections::HashSet;

const LIGHT_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const LIGHT_ATTRIBUTION: &str = "© OpenStreetMap contributors";
const DARK_TILES: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
const DARK_ATTRIBUTION: &str = "© CARTO";

#[derive(Clone, Debug, PartialEq)]
pub struct BaseMap {
    pub tiles: &'static str,
    pub attribution: &'static str,
    pub center: LatLon,
    pub zoom: u8,
}

impl BaseMap {
    pub fn new(dark_mode: bool, center: LatLon, zoom: u8) -> BaseMap {
        let (tiles, attribution) = if dark_mode {
            (DARK_TILES, DARK_ATTRIBUTION)
        } else {
            (LIGHT_TILES, LIGHT_ATTRIBUTION)
        };
        BaseMap {
            tiles,
            attribution,
            center,
            zoom,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub vehicle_id: String,
    pub points: Vec<LatLon>,
    pub colour: Hsl,
    pub dash: &'static str,
    pub weight: u8,
    pub opacity: f32,
}

impl Polyline {
    fn new(vehicle_id: &str, points: &[LatLon]) -> Polyline {
        Polyline {
            vehicle_id: vehicle_id.to_string(),
            points: points.to_vec(),
            colour: colour_of(vehicle_id),
            dash: "6, 10",
            weight: 3,
            opacity: 0.7,
        }
    }
}

/// Everything drawn on one frame of the map.
#[derive(Clone, Debug, PartialEq)]
pub struct MapLayer {
    pub base: BaseMap,
    pub markers: Vec<Marker>,
    pub polylines: Vec<Polyline>,
    pub annotations: Vec<Annotation>,
    pub legend: Vec<LegendEntry>,
}

/// Map state owned by the renderer: base map, status filter and path selection.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    base: BaseMap,
    filter: StatusFilter,
    selection: PathSelection,
}

impl MapView {
    pub fn new(base: BaseMap) -> MapView {
        MapView {
            base,
            filter: StatusFilter::default(),
            selection: PathSelection::default(),
        }
    }

    pub fn filter(&self) -> &StatusFilter {
        &self.filter
    }

    pub fn selection(&self) -> &PathSelection {
        &self.selection
    }

    pub fn toggle_status(&mut self, status: VehicleStatus) {
        self.filter.toggle(status);
    }

    /// Selects the cached path of `vehicle_id`. Returns false, changing nothing,
    /// if there is no cached non-empty path for it.
    pub fn select_path(&mut self, vehicle_id: &str, paths: &PathCache) -> bool {
        match paths.get(vehicle_id) {
            Some(path) => self.selection.select(vehicle_id, path),
            None => false,
        }
    }

    pub fn render(&self, snapshots: &[Snapshot], paths: &PathCache) -> MapLayer {
        let shown: Vec<&Snapshot> = snapshots
            .iter()
            .filter(|snapshot| self.filter.shows(snapshot))
            .collect();
        let shown_ids: HashSet<&str> = shown
            .iter()
            .flat_map(|snapshot| snapshot.vehicle_id.as_deref())
            .collect();
        MapLayer {
            base: self.base.clone(),
            markers: shown.iter().map(|snapshot| Marker::new(snapshot)).collect(),
            polylines: paths
                .iter()
                .filter(|(vehicle_id, points)| {
                    !points.is_empty() && shown_ids.contains(vehicle_id.as_str())
                })
                .map(|(vehicle_id, points)| Polyline::new(vehicle_id, points))
                .collect(),
            annotations: self.selection.annotations(),
            legend: legend(&self.filter),
        }
    }
}
