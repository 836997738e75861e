mod with_paths;
mod with_telemetry;

pub use with_paths::*;
pub use with_telemetry::*;
