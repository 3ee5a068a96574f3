//! Styled cell canvas and frame painting.

mod border;
mod core;

pub use border::{BorderGlyphs, BorderStyle, border_painter};
pub use core::Canvas;
