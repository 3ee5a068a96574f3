use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// The nine named terminal colours. Discriminants are the SGR colour digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    #[default]
    Default = 9,
}

impl NamedColor {
    pub const ALL: [NamedColor; 9] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::Default,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
            NamedColor::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colour name `{0}`")]
pub struct ParseColorError(pub String);

impl FromStr for NamedColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedColor::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// A terminal colour: either a named palette entry or 24-bit true colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Named(NamedColor),
    Rgb { r: u8, g: u8, b: u8 },
}

impl Default for Color {
    fn default() -> Self {
        Color::Named(NamedColor::Default)
    }
}

impl From<NamedColor> for Color {
    fn from(color: NamedColor) -> Self {
        Color::Named(color)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<NamedColor>().map(Color::Named)
    }
}

impl Color {
    pub const BLACK: Color = Color::Named(NamedColor::Black);
    pub const RED: Color = Color::Named(NamedColor::Red);
    pub const GREEN: Color = Color::Named(NamedColor::Green);
    pub const YELLOW: Color = Color::Named(NamedColor::Yellow);
    pub const BLUE: Color = Color::Named(NamedColor::Blue);
    pub const MAGENTA: Color = Color::Named(NamedColor::Magenta);
    pub const CYAN: Color = Color::Named(NamedColor::Cyan);
    pub const WHITE: Color = Color::Named(NamedColor::White);
    pub const DEFAULT: Color = Color::Named(NamedColor::Default);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Foreground escape: `ESC[3{n}m` or `ESC[38;2;r;g;bm`.
    pub fn fg_sequence(&self) -> String {
        self.sequence(Layer::Foreground).to_string()
    }

    /// Background escape: `ESC[4{n}m` or `ESC[48;2;r;g;bm`.
    pub fn bg_sequence(&self) -> String {
        self.sequence(Layer::Background).to_string()
    }

    pub(crate) fn sequence(self, layer: Layer) -> ColorSequence {
        ColorSequence { color: self, layer }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layer {
    Foreground,
    Background,
}

/// Display adaptor so styles can write colour escapes without allocating.
pub(crate) struct ColorSequence {
    color: Color,
    layer: Layer,
}

impl fmt::Display for ColorSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.color, self.layer) {
            (Color::Named(named), Layer::Foreground) => write!(f, "\x1b[3{}m", named.code()),
            (Color::Named(named), Layer::Background) => write!(f, "\x1b[4{}m", named.code()),
            (Color::Rgb { r, g, b }, Layer::Foreground) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
            (Color::Rgb { r, g, b }, Layer::Background) => write!(f, "\x1b[48;2;{r};{g};{b}m"),
        }
    }
}
