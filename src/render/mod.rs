//! Output side: presenting flattened frames to a terminal or any writer.

mod core;
mod terminal;

pub use core::{
    AnsiRenderer, DEFAULT_PRESENT_TARGET, LineEnding, OutputSink, RendererSettings, WriterSink,
};
pub use terminal::TerminalSession;
