use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::canvas::Canvas;
use crate::error::Result;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::width::display_width;

pub const DEFAULT_PRESENT_TARGET: &str = "room_view::present";

/// Terminator written after each row when rows are not cursor-addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Renderer runtime parameters.
#[derive(Debug, Clone, Default)]
pub struct RendererSettings {
    /// Zero-based `(row, col)` of the frame's top-left cell. When set, every
    /// row is cursor-addressed instead of line-terminated.
    pub origin: Option<(u16, u16)>,
    /// Zero-based `(row, col)` to park the cursor at after a frame.
    pub restore_cursor: Option<(u16, u16)>,
    pub line_ending: LineEnding,
    /// Clear the whole screen before each frame.
    pub clear_screen: bool,
    pub logger: Option<Logger>,
}

/// Writes finished frames to a terminal handle.
pub struct AnsiRenderer {
    settings: RendererSettings,
}

impl AnsiRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    /// Write a flattened frame (`\n`-terminated rows) verbatim, applying the
    /// configured positioning and line endings.
    pub fn present(&mut self, writer: &mut impl Write, frame: &str) -> Result<()> {
        if self.settings.clear_screen {
            queue!(writer, Clear(ClearType::All))?;
        }

        let mut rows = 0usize;
        let mut widest = 0usize;
        for (offset, line) in frame.split_terminator('\n').enumerate() {
            match self.settings.origin {
                Some((row, col)) => {
                    let row = row.saturating_add(offset.min(u16::MAX as usize) as u16);
                    queue!(writer, MoveTo(col, row))?;
                    writer.write_all(line.as_bytes())?;
                }
                None => {
                    writer.write_all(line.as_bytes())?;
                    writer.write_all(self.settings.line_ending.as_str().as_bytes())?;
                }
            }
            rows += 1;
            widest = widest.max(display_width(line));
        }

        if let Some((row, col)) = self.settings.restore_cursor {
            queue!(writer, MoveTo(col, row))?;
        }

        writer.flush()?;
        self.report(rows, widest);
        Ok(())
    }

    pub fn present_canvas(&mut self, writer: &mut impl Write, canvas: &Canvas) -> Result<()> {
        self.present(writer, &canvas.render())
    }

    fn report(&self, rows: usize, width: usize) {
        let Some(logger) = &self.settings.logger else {
            return;
        };
        let event = event_with_fields(
            LogLevel::Debug,
            DEFAULT_PRESENT_TARGET,
            "frame_presented",
            [json_kv("rows", rows), json_kv("width", width)],
        );
        let _ = logger.log_event(event);
    }
}

/// Anything that accepts finished frames.
pub trait OutputSink {
    fn present(&mut self, frame: &str) -> Result<()>;
}

/// [`OutputSink`] over any writer.
pub struct WriterSink<W: Write> {
    writer: W,
    renderer: AnsiRenderer,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, renderer: AnsiRenderer) -> Self {
        Self { writer, renderer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn present(&mut self, frame: &str) -> Result<()> {
        self.renderer.present(&mut self.writer, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;
    use crate::view::View;
    use serde_json::json;

    #[test]
    fn plain_present_keeps_rows_verbatim() {
        let frame = View::text("hi").render_to_string().unwrap();
        let mut output = Vec::new();
        AnsiRenderer::with_default().present(&mut output, &frame).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), frame);
    }

    #[test]
    fn crlf_endings_replace_newlines() {
        let mut renderer = AnsiRenderer::with_default();
        renderer.settings_mut().line_ending = LineEnding::CrLf;
        let mut output = Vec::new();
        renderer.present(&mut output, "a\nb\n").unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "a\r\nb\r\n");
    }

    #[test]
    fn origin_addresses_every_row() {
        let mut renderer = AnsiRenderer::new(RendererSettings {
            origin: Some((3, 2)),
            restore_cursor: Some((0, 0)),
            ..RendererSettings::default()
        });
        let mut output = Vec::new();
        renderer.present(&mut output, "hi\nyo\n").unwrap();
        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("\u{1b}[4;3Hhi"));
        assert!(rendered.contains("\u{1b}[5;3Hyo"));
        assert!(rendered.ends_with("\u{1b}[1;1H"));
    }

    #[test]
    fn writer_sink_reports_presented_frames() {
        let sink = MemorySink::new();
        let renderer = AnsiRenderer::new(RendererSettings {
            logger: Some(Logger::new(sink.clone())),
            ..RendererSettings::default()
        });
        let mut out = WriterSink::new(Vec::new(), renderer);
        let frame = View::bordered(View::primitive_text("ok")).render_to_string().unwrap();
        out.present(&frame).unwrap();

        assert_eq!(out.get_ref().len(), frame.len());
        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message, "frame_presented");
        assert_eq!(events[0].field("rows"), Some(&json!(3)));
        assert_eq!(events[0].field("width"), Some(&json!(4)));
    }
}
