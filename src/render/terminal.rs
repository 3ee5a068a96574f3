use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};

use crate::error::Result;

use super::core::{AnsiRenderer, OutputSink, RendererSettings};

/// Alternate-screen output session.
///
/// Entering hides the cursor and clears the alternate screen; leaving (or
/// dropping the session) restores both. Frames are drawn from the top-left
/// unless the settings name another origin. Input handling is not part of
/// the session.
pub struct TerminalSession<W: Write> {
    writer: W,
    renderer: AnsiRenderer,
    active: bool,
}

impl TerminalSession<io::Stdout> {
    pub fn stdout() -> Result<Self> {
        Self::enter(io::stdout(), RendererSettings::default())
    }
}

impl<W: Write> TerminalSession<W> {
    pub fn enter(mut writer: W, mut settings: RendererSettings) -> Result<Self> {
        settings.origin.get_or_insert((0, 0));
        execute!(writer, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self {
            writer,
            renderer: AnsiRenderer::new(settings),
            active: true,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn renderer_mut(&mut self) -> &mut AnsiRenderer {
        &mut self.renderer
    }

    /// Leave the alternate screen now rather than on drop.
    pub fn leave(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            execute!(self.writer, Show, LeaveAlternateScreen)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputSink for TerminalSession<W> {
    fn present(&mut self, frame: &str) -> Result<()> {
        self.renderer.present(&mut self.writer, frame)
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if self.active {
            execute!(self.writer, Show, LeaveAlternateScreen).ok();
        }
    }
}
