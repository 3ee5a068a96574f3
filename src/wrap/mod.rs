//! Text wrapping policies.

mod core;

pub(crate) use core::source_lines;
pub use core::{WrapError, WrapPolicy, wrap};
