pub mod alert;
pub mod maintenance;
pub mod path;
pub mod strategy;
pub mod telemetry;
pub mod vehicle;

pub use alert::*;
pub use maintenance::*;
pub use path::*;
pub use strategy::*;
pub use telemetry::*;
pub use vehicle::*;
