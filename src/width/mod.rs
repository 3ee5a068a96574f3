//! Display width helpers for rendered output.

mod utils;

pub use utils::{display_width, row_widths};
