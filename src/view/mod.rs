//! Composable view tree.
//!
//! A tree of [`View`] nodes renders bottom-up into [`crate::Canvas`]es, each
//! parent compositing its children. Fill sizing is answered by a
//! [`FillQuery`] threaded down from the parent, so a Fill node takes the
//! extent of the nearest ancestor that fixes that axis.

mod container;
mod core;
mod decorators;
mod settings;
mod text;

pub use container::Container;
pub use core::{
    Alignment, Available, Direction, FillQuery, Justification, SizeSpec, View,
};
pub use decorators::{Bordered, Padded};
pub use settings::{DEFAULT_RENDER_TARGET, RenderSettings};
pub use text::{PrimitiveText, Spacer, Text};
