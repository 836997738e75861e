mod control_alerts;
mod control_map;
mod draw_dashboard;
mod fetch_paths;
mod get_alerts;
mod get_telemetry;
mod get_vehicle_path;
mod redraw_map;
mod request_shutdown;
mod run_in_background;
pub mod send;
pub mod with;

pub use control_alerts::*;
pub use control_map::*;
pub use draw_dashboard::*;
pub use fetch_paths::*;
pub use get_alerts::*;
pub use get_telemetry::*;
pub use get_vehicle_path::*;
pub use redraw_map::*;
pub use request_shutdown::*;
pub use run_in_background::*;
pub use send::*;
pub use with::*;
