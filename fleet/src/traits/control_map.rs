use crate::map::LegendEntry;
use crate::model::VehicleStatus;
use crate::traits::SendMapArtist;
use commons::async_trait::async_trait;
use futures::FutureExt;

#[async_trait]
pub trait ControlMap {
    async fn toggle_status(&self, status: VehicleStatus);

    /// False if the vehicle has no path to select.
    async fn select_path(&self, vehicle_id: String) -> bool;

    async fn legend(&self) -> Vec<LegendEntry>;
}

#[async_trait]
impl<T> ControlMap for T
where
    T: SendMapArtist,
{
    async fn toggle_status(&self, status: VehicleStatus) {
        self.send_map_artist_future(move |map_artist| {
            map_artist.toggle_status(status).boxed()
        })
        .await
    }

    async fn select_path(&self, vehicle_id: String) -> bool {
        self.send_map_artist_future(move |map_artist| {
            map_artist.select_path(vehicle_id).boxed()
        })
        .await
    }

    async fn legend(&self) -> Vec<LegendEntry> {
        self.send_map_artist_future(|map_artist| async move { map_artist.legend() }.boxed())
            .await
    }
}
