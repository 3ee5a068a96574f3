//! Character-cell layout and rendering for terminal UIs.
//!
//! A [`View`] tree is rendered bottom-up into a [`Canvas`] of styled
//! [`Cell`]s, then flattened into an ANSI string that any [`OutputSink`] can
//! present. Layout is pure: nothing here reads terminal state, and every
//! failure comes back as a [`LayoutError`].

pub mod canvas;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod style;
pub mod view;
pub mod width;
pub mod wrap;

pub use canvas::{BorderStyle, Canvas};
pub use error::{Axis, LayoutError, Result};
pub use geometry::{Rect, Size};
pub use grid::{Grid, GridError, Line};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult, MemorySink,
};
pub use metrics::{MetricSnapshot, RenderMetrics};
pub use render::{AnsiRenderer, OutputSink, RendererSettings, TerminalSession, WriterSink};
pub use style::{Attributes, Cell, Color, NamedColor, Style};
pub use view::{
    Alignment, Available, Bordered, Container, Direction, FillQuery, Justification, Padded,
    PrimitiveText, RenderSettings, SizeSpec, Spacer, Text, View,
};
pub use width::display_width;
pub use wrap::{WrapError, WrapPolicy, wrap};
