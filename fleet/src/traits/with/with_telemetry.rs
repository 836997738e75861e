use crate::model::Snapshot;
use commons::async_trait::async_trait;

#[async_trait]
pub trait WithTelemetry {
    async fn with_telemetry<F, O>(&self, function: F) -> O
    where
        F: FnOnce(&[Snapshot]) -> O + Send;

    async fn mut_telemetry<F, O>(&self, function: F) -> O
    where
        F: FnOnce(&mut Vec<Snapshot>) -> O + Send;
}
