use crate::model::Alert;
use crate::traits::SendAlertPoller;
use commons::async_trait::async_trait;
use futures::FutureExt;

#[async_trait]
pub trait ControlAlerts {
    async fn open_alerts(&self);

    async fn close_alerts(&self);

    /// The alert at `index` in the open panel.
    async fn alert(&self, index: usize) -> Option<Alert>;
}

#[async_trait]
impl<T> ControlAlerts for T
where
    T: SendAlertPoller,
{
    async fn open_alerts(&self) {
        self.send_alert_poller_future(|alert_poller| {
            async move { alert_poller.open_panel() }.boxed()
        })
        .await
    }

    async fn close_alerts(&self) {
        self.send_alert_poller_future(|alert_poller| {
            async move { alert_poller.close_panel() }.boxed()
        })
        .await
    }

    async fn alert(&self, index: usize) -> Option<Alert> {
        self.send_alert_poller_future(move |alert_poller| {
            async move { alert_poller.alert(index) }.boxed()
        })
        .await
    }
}
