use std::fmt;

use super::color::Color;
use super::core::{RESET, Style};

/// One display character plus its style.
///
/// Cells are plain values: every modifier returns a new cell and leaves the
/// receiver as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    ch: char,
    style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

impl Cell {
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            style: Style::new(),
        }
    }

    pub const fn styled(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// A space with the default style.
    pub const fn blank() -> Self {
        Self::new(' ')
    }

    pub const fn ch(&self) -> char {
        self.ch
    }

    pub const fn style(&self) -> Style {
        self.style
    }

    pub const fn with_char(self, ch: char) -> Self {
        Self { ch, ..self }
    }

    pub const fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }

    fn map_style(self, f: impl FnOnce(Style) -> Style) -> Self {
        Self {
            style: f(self.style),
            ..self
        }
    }

    pub fn bold(self) -> Self {
        self.map_style(Style::bold)
    }

    pub fn italic(self) -> Self {
        self.map_style(Style::italic)
    }

    pub fn underline(self) -> Self {
        self.map_style(Style::underline)
    }

    pub fn strikethrough(self) -> Self {
        self.map_style(Style::strikethrough)
    }

    pub fn inverse(self) -> Self {
        self.map_style(Style::inverse)
    }

    pub fn invisible(self) -> Self {
        self.map_style(Style::invisible)
    }

    pub fn blink(self) -> Self {
        self.map_style(Style::blink)
    }

    pub fn fg_color(self, color: Color) -> Self {
        self.map_style(|style| style.with_fg(color))
    }

    pub fn bg_color(self, color: Color) -> Self {
        self.map_style(|style| style.with_bg(color))
    }

    /// Style prefix, the character, then the reset code.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub(crate) fn write_to(&self, out: &mut impl fmt::Write) -> fmt::Result {
        self.style.write_prefix(out)?;
        out.write_char(self.ch)?;
        out.write_str(RESET)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
