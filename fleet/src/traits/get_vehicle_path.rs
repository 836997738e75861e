use crate::api::ApiError;
use crate::model::LatLon;
use commons::async_trait::async_trait;

#[async_trait]
pub trait GetVehiclePath {
    async fn vehicle_path(&self, vehicle_id: &str) -> Result<Vec<LatLon>, ApiError>;
}
