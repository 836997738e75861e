mod send_alert_poller;
mod send_map_artist;
mod send_path_fetcher;

pub use send_alert_poller::*;
pub use send_map_artist::*;
pub use send_path_fetcher::*;
