mod color;
mod filter;
mod layer;
mod legend;
mod marker;
mod selection;

pub use color::*;
pub use filter::*;
pub use layer::*;
pub use legend::*;
pub use marker::*;
pub use selection::*;
