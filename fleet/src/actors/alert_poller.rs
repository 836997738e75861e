use crate::model::Alert;
use crate::traits::SendAlertPoller;
use commons::log::{debug, error};
use commons::tokio_util::sync::CancellationToken;
use futures::FutureExt;

/// Drives the alert badge and the alert side panel.
pub struct AlertPoller<T> {
    cx: T,
    lifetime: CancellationToken,
    count: u64,
    panel_open: bool,
    opened: u64,
    alerts: Vec<Alert>,
}

impl<T> AlertPoller<T>
where
    T: SendAlertPoller,
{
    pub fn new(cx: T, lifetime: CancellationToken) -> AlertPoller<T> {
        AlertPoller {
            cx,
            lifetime,
            count: 0,
            panel_open: false,
            opened: 0,
            alerts: vec![],
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub async fn poll_count(&mut self) {
        let result = tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => {
                debug!("Discarding alert count after shutdown");
                return;
            }
            result = self.cx.active_alert_count() => result,
        };
        self.count = result.unwrap_or_else(|err| {
            error!("Failed to fetch alert count: {}", err);
            0
        });
        self.cx.draw_alert_badge(self.count);
    }

    /// Opens the panel and fetches the active alerts once, in the background.
    pub fn open_panel(&mut self) {
        self.panel_open = true;
        self.opened += 1;
        self.alerts.clear();

        let opened = self.opened;
        let cx = self.cx.clone();
        let lifetime = self.lifetime.clone();
        self.cx.run_in_background(async move {
            let result = tokio::select! {
                biased;
                _ = lifetime.cancelled() => {
                    debug!("Discarding active alerts after shutdown");
                    return;
                }
                result = cx.active_alerts() => result,
            };
            let alerts = result.unwrap_or_else(|err| {
                error!("Failed to fetch active alerts: {}", err);
                vec![]
            });
            cx.send_alert_poller_future_background(move |alert_poller| {
                async move { alert_poller.show_alerts(opened, alerts) }.boxed()
            });
        });
    }

    /// Ignores lists fetched for a panel that has since been closed or reopened.
    pub fn show_alerts(&mut self, opened: u64, alerts: Vec<Alert>) {
        if !self.panel_open || opened != self.opened {
            debug!("Discarding {} alerts for closed panel", alerts.len());
            return;
        }
        self.alerts = alerts;
        self.cx.draw_alert_panel(&self.alerts);
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
        self.alerts.clear();
    }

    pub fn alert(&self, index: usize) -> Option<Alert> {
        if !self.panel_open {
            return None;
        }
        self.alerts.get(index).cloned()
    }
}
