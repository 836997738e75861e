mod console_canvas;

pub use console_canvas::*;
