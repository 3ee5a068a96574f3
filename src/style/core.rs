use std::fmt;

use bitflags::bitflags;

use super::color::{Color, Layer};

bitflags! {
    /// Text attributes a cell can carry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        const UNDERLINE     = 1 << 0;
        const BOLD          = 1 << 1;
        const ITALIC        = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const INVERSE       = 1 << 4;
        const INVISIBLE     = 1 << 5;
        const BLINK         = 1 << 6;
    }
}

/// Emission order of attribute codes, paired with their SGR parameter.
const SGR_ORDER: [(Attributes, u8); 7] = [
    (Attributes::UNDERLINE, 4),
    (Attributes::BOLD, 1),
    (Attributes::ITALIC, 3),
    (Attributes::STRIKETHROUGH, 9),
    (Attributes::INVERSE, 7),
    (Attributes::INVISIBLE, 8),
    (Attributes::BLINK, 5),
];

/// Universal SGR reset appended after every rendered cell.
pub const RESET: &str = "\x1b[0m";

/// Immutable colour pair plus attribute set.
///
/// Every modifier consumes `self` and returns a changed copy, so a style can
/// be shared by any number of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    fg: Color,
    bg: Color,
    attrs: Attributes,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: Color::DEFAULT,
            bg: Color::DEFAULT,
            attrs: Attributes::empty(),
        }
    }

    pub const fn fg(&self) -> Color {
        self.fg
    }

    pub const fn bg(&self) -> Color {
        self.bg
    }

    pub const fn attributes(&self) -> Attributes {
        self.attrs
    }

    pub fn has(&self, attr: Attributes) -> bool {
        self.attrs.contains(attr)
    }

    pub const fn with_fg(self, fg: Color) -> Self {
        Self { fg, ..self }
    }

    pub const fn with_bg(self, bg: Color) -> Self {
        Self { bg, ..self }
    }

    pub fn with_attributes(self, attrs: Attributes) -> Self {
        Self {
            attrs: self.attrs | attrs,
            ..self
        }
    }

    pub fn without_attributes(self, attrs: Attributes) -> Self {
        Self {
            attrs: self.attrs - attrs,
            ..self
        }
    }

    pub fn underline(self) -> Self {
        self.with_attributes(Attributes::UNDERLINE)
    }

    pub fn bold(self) -> Self {
        self.with_attributes(Attributes::BOLD)
    }

    pub fn italic(self) -> Self {
        self.with_attributes(Attributes::ITALIC)
    }

    pub fn strikethrough(self) -> Self {
        self.with_attributes(Attributes::STRIKETHROUGH)
    }

    pub fn inverse(self) -> Self {
        self.with_attributes(Attributes::INVERSE)
    }

    pub fn invisible(self) -> Self {
        self.with_attributes(Attributes::INVISIBLE)
    }

    pub fn blink(self) -> Self {
        self.with_attributes(Attributes::BLINK)
    }

    /// Escape prefix for this style: attribute codes, then fg, then bg.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_prefix(&mut out);
        out
    }

    pub(crate) fn write_prefix(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for (attr, code) in SGR_ORDER {
            if self.attrs.contains(attr) {
                write!(out, "\x1b[{code}m")?;
            }
        }
        write!(out, "{}", self.fg.sequence(Layer::Foreground))?;
        write!(out, "{}", self.bg.sequence(Layer::Background))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_prefix(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_still_emits_both_colours() {
        assert_eq!(Style::new().render(), "\x1b[39m\x1b[49m");
    }

    #[test]
    fn attributes_render_in_fixed_order() {
        let style = Style::new()
            .blink()
            .bold()
            .inverse()
            .underline()
            .invisible()
            .strikethrough()
            .italic();
        assert_eq!(
            style.render(),
            "\x1b[4m\x1b[1m\x1b[3m\x1b[9m\x1b[7m\x1b[8m\x1b[5m\x1b[39m\x1b[49m"
        );
    }

    #[test]
    fn modifiers_leave_the_original_untouched() {
        let base = Style::new().with_fg(Color::GREEN);
        let bold = base.bold();
        assert!(!base.has(Attributes::BOLD));
        assert!(bold.has(Attributes::BOLD));
        assert_eq!(bold.fg(), Color::GREEN);
        assert_eq!(bold.without_attributes(Attributes::BOLD), base);
    }

    #[test]
    fn colours_follow_attributes() {
        let style = Style::new()
            .italic()
            .with_fg(Color::rgb(1, 2, 3))
            .with_bg(Color::BLUE);
        assert_eq!(style.render(), "\x1b[3m\x1b[38;2;1;2;3m\x1b[44m");
        assert_eq!(style.to_string(), style.render());
    }
}
