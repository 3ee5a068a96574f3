//! Colours, styles and styled cells.
//!
//! Everything here is a `Copy` value type. Rendering produces the SGR escape
//! prefix consumed by [`crate::canvas::Canvas::render`].

mod cell;
mod color;
mod core;

pub use cell::Cell;
pub use color::{Color, NamedColor, ParseColorError};
pub use core::{Attributes, RESET, Style};
