use crate::style::{Cell, Color};

use super::core::Canvas;

/// Box-drawing character set for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub vertical: char,
    pub horizontal: char,
}

/// Line style used when painting a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    Light,
    Heavy,
    Double,
    Dashed,
    Rounded,
}

impl BorderStyle {
    pub const fn glyphs(self) -> BorderGlyphs {
        match self {
            BorderStyle::Light => BorderGlyphs {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                vertical: '│',
                horizontal: '─',
            },
            BorderStyle::Heavy => BorderGlyphs {
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                vertical: '┃',
                horizontal: '━',
            },
            BorderStyle::Double => BorderGlyphs {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                vertical: '║',
                horizontal: '═',
            },
            BorderStyle::Dashed => BorderGlyphs {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                vertical: '╎',
                horizontal: '╌',
            },
            BorderStyle::Rounded => BorderGlyphs {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                vertical: '│',
                horizontal: '─',
            },
        }
    }
}

impl BorderGlyphs {
    /// Glyph for ring position `(x, y)` on a `width` x `height` frame.
    ///
    /// Corners win over edges.
    pub fn at(&self, x: usize, y: usize, width: usize, height: usize) -> char {
        let left = x == 0;
        let right = x + 1 == width;
        let top = y == 0;
        let bottom = y + 1 == height;
        match (left, right, top, bottom) {
            (true, _, true, _) => self.top_left,
            (true, _, _, true) => self.bottom_left,
            (_, true, true, _) => self.top_right,
            (_, true, _, true) => self.bottom_right,
            (true, _, _, _) | (_, true, _, _) => self.vertical,
            _ => self.horizontal,
        }
    }
}

/// Border callback for [`Canvas::apply_border`] drawing `style` in `color`.
pub fn border_painter(style: BorderStyle, color: Color) -> impl Fn(&Canvas, usize, usize) -> Cell {
    let glyphs = style.glyphs();
    move |canvas, x, y| {
        Cell::new(glyphs.at(x, y, canvas.width(), canvas.height())).fg_color(color)
    }
}
