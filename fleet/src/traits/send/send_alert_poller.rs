use crate::actors::AlertPoller;
use crate::traits::{DrawDashboard, GetAlerts, RunInBackground};
use commons::async_trait::async_trait;
use futures::future::BoxFuture;

#[async_trait]
pub trait SendAlertPoller:
    DrawDashboard + GetAlerts + RunInBackground + Clone + Sized + Send + Sync + 'static
{
    async fn send_alert_poller_future<F, O>(&self, function: F) -> O
    where
        O: Send + 'static,
        F: for<'a> FnOnce(&'a mut AlertPoller<Self>) -> BoxFuture<'a, O> + Send + 'static;

    fn send_alert_poller_future_background<F, O>(&self, function: F)
    where
        O: Send + 'static,
        F: for<'a> FnOnce(&'a mut AlertPoller<Self>) -> BoxFuture<'a, O> + Send + 'static;
}
