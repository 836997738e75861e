use crate::api::ApiError;
use crate::model::LatLon;
use crate::traits::SendPathFetcher;
use commons::log::{debug, warn};
use commons::tokio_util::sync::CancellationToken;
use futures::FutureExt;
use std::collections::HashSet;

pub struct PathFetcher<T> {
    cx: T,
    lifetime: CancellationToken,
    in_flight: HashSet<String>,
}

impl<T> PathFetcher<T>
where
    T: SendPathFetcher,
{
    pub fn new(cx: T, lifetime: CancellationToken) -> PathFetcher<T> {
        PathFetcher {
            cx,
            lifetime,
            in_flight: HashSet::new(),
        }
    }

    /// Starts a background fetch for every vehicle in `vehicle_ids` that is neither in the path
    /// cache nor already being fetched. Each path is stored as it arrives.
    pub async fn fetch_paths(&mut self, vehicle_ids: Vec<String>) {
        let in_flight = &self.in_flight;
        let unresolved: Vec<String> = self
            .cx
            .with_paths(move |paths| {
                vehicle_ids
                    .into_iter()
                    .filter(|vehicle_id| {
                        !paths.is_resolved(vehicle_id) && !in_flight.contains(vehicle_id)
                    })
                    .collect()
            })
            .await;
        if unresolved.is_empty() {
            return;
        }
        debug!("Fetching paths for {} vehicles", unresolved.len());

        for vehicle_id in unresolved {
            self.in_flight.insert(vehicle_id.clone());
            let cx = self.cx.clone();
            let lifetime = self.lifetime.clone();
            self.cx.run_in_background(async move {
                let result = tokio::select! {
                    biased;
                    _ = lifetime.cancelled() => {
                        debug!("Discarding path request for {} after shutdown", vehicle_id);
                        return;
                    }
                    result = cx.vehicle_path(&vehicle_id) => result,
                };
                cx.send_path_fetcher_future_background(move |path_fetcher| {
                    path_fetcher.store_path(vehicle_id, result).boxed()
                });
            });
        }
    }

    /// A failed vehicle stays unresolved and is fetched again on its next sighting.
    pub async fn store_path(&mut self, vehicle_id: String, result: Result<Vec<LatLon>, ApiError>) {
        self.in_flight.remove(&vehicle_id);
        if self.lifetime.is_cancelled() {
            debug!("Discarding path for {} after shutdown", vehicle_id);
            return;
        }
        match result {
            Ok(path) => {
                debug!("Resolved path for vehicle {}", vehicle_id);
                self.cx
                    .mut_paths(move |paths| paths.insert(vehicle_id, path))
                    .await;
                self.cx.redraw_map();
            }
            Err(err) => warn!("Error fetching path for vehicle {}: {}", vehicle_id, err),
        }
    }
}
