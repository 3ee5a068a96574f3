//! Crate-wide error type.

mod types;

pub use types::{Axis, LayoutError, Result};
