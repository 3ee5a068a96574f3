//! Generic 2D grid primitive.
//!
//! The canvas and every layout node build on this container; the
//! implementation lives in the private `core` module.

mod core;

pub use core::{Grid, GridError, Line};
