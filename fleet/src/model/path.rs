use serde::{Deserialize, Serialize};
use std::collections::btree_map::Iter;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLon {
    pub fn new(latitude: f64, longitude: f64) -> LatLon {
        LatLon {
            latitude,
            longitude,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PathResponse {
    pub path: Vec<LatLon>,
}

/// Resolved routes by vehicle id. Entries are added or overwritten, never removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathCache {
    paths: BTreeMap<String, Vec<LatLon>>,
}

impl PathCache {
    pub fn insert(&mut self, vehicle_id: String, path: Vec<LatLon>) {
        self.paths.insert(vehicle_id, path);
    }

    pub fn is_resolved(&self, vehicle_id: &str) -> bool {
        self.paths.contains_key(vehicle_id)
    }

    pub fn get(&self, vehicle_id: &str) -> Option<&[LatLon]> {
        self.paths.get(vehicle_id).map(|path| path.as_slice())
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// In vehicle id order.
    pub fn iter(&self) -> Iter<'_, String, Vec<LatLon>> {
        self.paths.iter()
    }
}
