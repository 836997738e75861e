use crate::model::LatLon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    pub fn title(&self) -> &'static str {
        match self {
            Endpoint::Start => "Start Location",
            Endpoint::End => "End Location",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub endpoint: Endpoint,
    pub vehicle_id: String,
    pub position: LatLon,
}

impl Annotation {
    pub fn coordinates(&self) -> String {
        format!(
            "{:.4}, {:.4}",
            self.position.latitude, self.position.longitude
        )
    }
}

/// The clicked path, if any. A new click replaces it; nothing clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathSelection {
    selected: Option<(String, LatLon, LatLon)>,
}

impl PathSelection {
    /// Returns false, leaving the selection as it was, if `path` is empty.
    pub fn select(&mut self, vehicle_id: &str, path: &[LatLon]) -> bool {
        match (path.first(), path.last()) {
            (Some(start), Some(end)) => {
                self.selected = Some((vehicle_id.to_string(), *start, *end));
                true
            }
            _ => false,
        }
    }

    pub fn vehicle_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|(vehicle_id, _, _)| vehicle_id.as_str())
    }

    pub fn annotations(&self) -> Vec<Annotation> {
        match &self.selected {
            Some((vehicle_id, start, end)) => vec![
                Annotation {
                    endpoint: Endpoint::Start,
                    vehicle_id: vehicle_id.clone(),
                    position: *start,
                },
                Annotation {
                    endpoint: Endpoint::End,
                    vehicle_id: vehicle_id.clone(),
                    position: *end,
                },
            ],
            None => vec![],
        }
    }
}
