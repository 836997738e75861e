//! One-shot commands. Each fetches what it needs and returns the lines to print.

mod alerts;
mod maintenance;
mod strategy;
mod vehicles;

pub use alerts::*;
pub use maintenance::*;
pub use strategy::*;
pub use vehicles::*;
