use crate::map::{LegendEntry, MapLayer};
use crate::model::Alert;

pub trait DrawDashboard {
    fn draw_map(&self, layer: &MapLayer);

    fn draw_legend(&self, legend: &[LegendEntry]);

    /// Hidden when `count` is zero.
    fn draw_alert_badge(&self, count: u64);

    fn draw_alert_panel(&self, alerts: &[Alert]);

    fn notify(&self, message: &str);
}
