use crate::api::ApiError;
use crate::model::Alert;
use commons::async_trait::async_trait;

#[async_trait]
pub trait GetAlerts {
    async fn active_alert_count(&self) -> Result<u64, ApiError>;

    async fn active_alerts(&self) -> Result<Vec<Alert>, ApiError>;
}
