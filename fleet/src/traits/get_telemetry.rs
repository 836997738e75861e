use crate::api::ApiError;
use crate::model::Snapshot;
use commons::async_trait::async_trait;

#[async_trait]
pub trait GetTelemetry {
    async fn latest_telemetry(&self) -> Result<Vec<Snapshot>, ApiError>;
}
