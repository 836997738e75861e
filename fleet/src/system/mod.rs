mod context;
#[allow(clippy::module_inception)]
mod system;

pub use context::Context;
pub use system::System;
