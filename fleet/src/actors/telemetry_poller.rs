use crate::model::active_vehicle_ids;
use crate::traits::{FetchPaths, GetTelemetry, RedrawMap, WithTelemetry};
use commons::log::{debug, error, info};
use commons::tokio_util::sync::CancellationToken;

pub struct TelemetryPoller<T> {
    cx: T,
    lifetime: CancellationToken,
}

impl<T> TelemetryPoller<T>
where
    T: FetchPaths + GetTelemetry + RedrawMap + WithTelemetry + Send + Sync,
{
    pub fn new(cx: T, lifetime: CancellationToken) -> TelemetryPoller<T> {
        TelemetryPoller { cx, lifetime }
    }

    /// Replaces the snapshot list with the latest telemetry, or with nothing if the fetch fails.
    pub async fn poll(&mut self) {
        let result = tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => {
                debug!("Discarding telemetry response after shutdown");
                return;
            }
            result = self.cx.latest_telemetry() => result,
        };

        let snapshots = result.unwrap_or_else(|err| {
            error!("Error fetching telemetry: {}", err);
            vec![]
        });
        let active = active_vehicle_ids(&snapshots);
        info!(
            "Telemetry for {} vehicles, {} active",
            snapshots.len(),
            active.len()
        );

        self.cx
            .mut_telemetry(move |telemetry| *telemetry = snapshots)
            .await;
        if !active.is_empty() {
            self.cx.fetch_paths(active);
        }
        self.cx.redraw_map();
    }
}
