use crate::model::{Snapshot, VehicleStatus};
use std::collections::BTreeSet;
use std::iter::FromIterator;

/// Statuses elected for display. Empty shows every vehicle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusFilter {
    statuses: BTreeSet<VehicleStatus>,
}

impl StatusFilter {
    pub fn toggle(&mut self, status: VehicleStatus) {
        if !self.statuses.remove(&status) {
            self.statuses.insert(status);
        }
    }

    pub fn contains(&self, status: VehicleStatus) -> bool {
        self.statuses.contains(&status)
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn shows(&self, snapshot: &Snapshot) -> bool {
        if self.statuses.is_empty() {
            return true;
        }
        match snapshot.vehicle_status() {
            Some(status) => self.statuses.contains(&status),
            None => false,
        }
    }
}

impl FromIterator<VehicleStatus> for StatusFilter {
    fn from_iter<I>(statuses: I) -> StatusFilter
    where
        I: IntoIterator<Item = VehicleStatus>,
    {
        StatusFilter {
            statuses: statuses.into_iter().collect(),
        }
    }
}
