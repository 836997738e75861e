use crate::actors::{AlertPoller, MapArtist, PathFetcher, TelemetryPoller};
use crate::api::{ApiError, HttpClient};
use crate::artists::ConsoleCanvas;
use crate::map::{LegendEntry, MapLayer};
use crate::model::{Alert, LatLon, PathCache, Snapshot};
use crate::parameters::Parameters;
use crate::services::BackgroundService;
use crate::traits::{
    DrawDashboard, GetAlerts, GetTelemetry, GetVehiclePath, RequestShutdown, RunInBackground,
    SendAlertPoller, SendMapArtist, SendPathFetcher, WithPaths, WithTelemetry,
};
use commons::async_trait::async_trait;
use commons::fn_sender::FnSender;
use commons::log::debug;
use commons::tokio_util::sync::CancellationToken;
use futures::future::BoxFuture;
use futures::Future;
use std::io::Stdout;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct Context {
    pub alert_poller_tx: FnSender<AlertPoller<Context>>,
    pub api: Arc<HttpClient>,
    pub background_service: Arc<BackgroundService>,
    pub canvas: Arc<ConsoleCanvas<Stdout>>,
    pub map_artist_tx: FnSender<MapArtist<Context>>,
    pub parameters: Arc<Parameters>,
    pub path_fetcher_tx: FnSender<PathFetcher<Context>>,
    pub paths: Arc<RwLock<PathCache>>,
    pub shutdown: CancellationToken,
    pub telemetry: Arc<RwLock<Vec<Snapshot>>>,
    pub telemetry_poller_tx: FnSender<TelemetryPoller<Context>>,
}

impl Context {
    pub fn clone_with_name(&self, name: &'static str) -> Context {
        Context {
            alert_poller_tx: self.alert_poller_tx.clone_with_name(name),
            api: self.api.clone(),
            background_service: self.background_service.clone(),
            canvas: self.canvas.clone(),
            map_artist_tx: self.map_artist_tx.clone_with_name(name),
            parameters: self.parameters.clone(),
            path_fetcher_tx: self.path_fetcher_tx.clone_with_name(name),
            paths: self.paths.clone(),
            shutdown: self.shutdown.clone(),
            telemetry: self.telemetry.clone(),
            telemetry_poller_tx: self.telemetry_poller_tx.clone_with_name(name),
        }
    }
}

impl DrawDashboard for Context {
    fn draw_map(&self, layer: &MapLayer) {
        self.canvas.draw_map(layer);
    }

    fn draw_legend(&self, legend: &[LegendEntry]) {
        self.canvas.draw_legend(legend);
    }

    fn draw_alert_badge(&self, count: u64) {
        self.canvas.draw_alert_badge(count);
    }

    fn draw_alert_panel(&self, alerts: &[Alert]) {
        self.canvas.draw_alert_panel(alerts);
    }

    fn notify(&self, message: &str) {
        self.canvas.notify(message);
    }
}

#[async_trait]
impl GetAlerts for Context {
    async fn active_alert_count(&self) -> Result<u64, ApiError> {
        self.api.active_alert_count().await
    }

    async fn active_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        self.api.active_alerts().await
    }
}

#[async_trait]
impl GetTelemetry for Context {
    async fn latest_telemetry(&self) -> Result<Vec<Snapshot>, ApiError> {
        self.api.latest_telemetry().await
    }
}

#[async_trait]
impl GetVehiclePath for Context {
    async fn vehicle_path(&self, vehicle_id: &str) -> Result<Vec<LatLon>, ApiError> {
        self.api.vehicle_path(vehicle_id).await
    }
}

impl RequestShutdown for Context {
    fn request_shutdown(&self) {
        debug!("Shutdown requested");
        self.shutdown.cancel();
    }
}

impl RunInBackground for Context {
    fn run_in_background<Fut>(&self, future: Fut)
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.background_service.run_in_background(future);
    }
}

#[async_trait]
impl SendAlertPoller for Context {
    async fn send_alert_poller_future<F, O>(&self, function: F) -> O
    where
        O: Send + 'static,
        F: for<'a> FnOnce(&'a mut AlertPoller<Self>) -> BoxFuture<'a, O> + Send + 'static,
    {
        self.alert_poller_tx.send_future(function).await
    }

    fn send_alert_poller_future_background<F, O>(&self, function: F)
    where
        O: Send + 'static,
        F: for<'a> FnOnce(&'a mut AlertPoller<Self>) -> BoxFuture<'a, O> + Send + 'static,
    {
        let _ = self.alert_poller_tx.send_future(function);
    }
}

#[async_trait]
impl SendMapArtist for Context {
    async fn send_map_artist_future<F, O>(&self, function: F) -> O
    where
        O: Send + 'static,
        F: for<'a> FnOnce(&'a mut MapArtist<Self>) -> BoxFuture<'a, O> + Send + 'static,
    {
        self.map_artist_tx.send_future(function).await
    }

    fn send_map_artist_future_background<F, O>(&self, function: F)
    where
        O: Send + 'static,
        F: for<'a> FnOnce(&'a mut MapArtist<Self>) -> BoxFuture<'a, O> + Send + 'static,
    {
        let _ = self.map_artist_tx.send_future(function);
    }
}

impl SendPathFetcher for Context {
    fn send_path_fetcher_future_background<F, O>(&self, function: F)
    where
        O: Send + 'static,
        F: for<'a> FnOnce(&'a mut PathFetcher<Self>) -> BoxFuture<'a, O> + Send + 'static,
    {
        let _ = self.path_fetcher_tx.send_future(function);
    }
}

#[async_trait]
impl WithPaths for Context {
    async fn with_paths<F, O>(&self, function: F) -> O
    where
        F: FnOnce(&PathCache) -> O + Send,
    {
        let paths = self.paths.read().await;
        function(&paths)
    }

    async fn mut_paths<F, O>(&self, function: F) -> O
    where
        F: FnOnce(&mut PathCache) -> O + Send,
    {
        let mut paths = self.paths.write().await;
        function(&mut paths)
    }
}

#[async_trait]
impl WithTelemetry for Context {
    async fn with_telemetry<F, O>(&self, function: F) -> O
    where
        F: FnOnce(&[Snapshot]) -> O + Send,
    {
        let telemetry = self.telemetry.read().await;
        function(&telemetry)
    }

    async fn mut_telemetry<F, O>(&self, function: F) -> O
    where
        F: FnOnce(&mut Vec<Snapshot>) -> O + Send,
    {
        let mut telemetry = self.telemetry.write().await;
        function(&mut telemetry)
    }
}
