mod alert_poller;
mod console;
mod map_artist;
mod path_fetcher;
mod telemetry_poller;

pub use alert_poller::AlertPoller;
pub use console::{stdin_lines, Console};
pub use map_artist::MapArtist;
pub use path_fetcher::PathFetcher;
pub use telemetry_poller::TelemetryPoller;
