use crate::actors::MapArtist;
use crate::traits::{DrawDashboard, WithPaths, WithTelemetry};
use commons::async_trait::async_trait;
use futures::future::BoxFuture;

#[async_trait]
pub trait SendMapArtist: DrawDashboard + WithPaths + WithTelemetry + Sized + Send + Sync {
    async fn send_map_artist_future<F, O>(&self, function: F) -> O
    where
        O: Send + 'static,
        F: for<'a> FnOnce(&'a mut MapArtist<Self>) -> BoxFuture<'a, O> + Send + 'static;

    fn send_map_artist_future_background<F, O>(&self, function: F)
    where
        O: Send + 'static,
        F: for<'a> FnOnce(&'a mut MapArtist<Self>) -> BoxFuture<'a, O> + Send + 'static;
}
