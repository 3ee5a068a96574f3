use crate::canvas::Canvas;
use crate::error::{Axis, Result};
use crate::style::{Cell, Style};
use crate::wrap::{WrapPolicy, source_lines, wrap};

use super::container::Container;
use super::core::{Alignment, Direction, FillQuery, SizeSpec, resolve_axis};
use super::settings::RenderPass;

/// Wrapped multi-line text.
///
/// Rendering wraps to an effective width and stacks one [`PrimitiveText`]
/// per line in a rows container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub text: String,
    pub wrap: WrapPolicy,
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub alignment: Alignment,
    pub style: Style,
    pub debug_bg: bool,
}

impl Text {
    pub const KIND: &'static str = "text";

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_wrap(mut self, wrap: WrapPolicy) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_width(mut self, width: SizeSpec) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: SizeSpec) -> Self {
        self.height = height;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_debug_bg(mut self, enabled: bool) -> Self {
        self.debug_bg = enabled;
        self
    }

    /// Longest source line, before wrapping.
    fn natural_width(&self) -> usize {
        source_lines(&self.text)
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn render(&self, pass: &mut RenderPass<'_>, fill: Option<FillQuery<'_>>) -> Result<Canvas> {
        let resolved = resolve_axis(self.width, Axis::Width, Self::KIND, fill)?;
        // Auto never cuts a line, so any policy minimum is safe to apply.
        let width = resolved.unwrap_or_else(|| self.natural_width().max(self.wrap.min_width()));

        let lines = wrap(&self.text, width, self.wrap)?;
        // Over-long words stay whole and widen the block past `width`.
        let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let stack = Container {
            children: lines
                .into_iter()
                .map(|line| PrimitiveText::new(line).with_style(self.style).into())
                .collect(),
            direction: Direction::Rows,
            alignment: self.alignment,
            width: resolved.map_or(SizeSpec::Auto, |w| SizeSpec::Fixed(w.max(longest))),
            height: self.height,
            ..Container::default()
        };
        stack.render(pass, fill)
    }
}

/// A single unwrapped line; one cell per character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrimitiveText {
    pub text: String,
    pub style: Style,
    pub debug_bg: bool,
}

impl PrimitiveText {
    pub const KIND: &'static str = "primitive_text";

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_debug_bg(mut self, enabled: bool) -> Self {
        self.debug_bg = enabled;
        self
    }

    pub(crate) fn render(&self) -> Canvas {
        let mut canvas = Canvas::new(self.text.chars().count(), 1);
        for (x, ch) in self.text.chars().enumerate() {
            canvas.set(x as isize, 0, Cell::styled(ch, self.style));
        }
        canvas
    }
}

/// Empty block of blank cells.
///
/// Fixed axes give their value. Fill takes the parent's extent when one is
/// known; anything unresolved is zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Spacer {
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub debug_bg: bool,
}

impl Spacer {
    pub const KIND: &'static str = "spacer";

    pub fn new(width: SizeSpec, height: SizeSpec) -> Self {
        Self {
            width,
            height,
            debug_bg: false,
        }
    }

    pub fn with_debug_bg(mut self, enabled: bool) -> Self {
        self.debug_bg = enabled;
        self
    }

    fn extent(spec: SizeSpec, axis: Axis, fill: Option<FillQuery<'_>>) -> usize {
        match spec {
            SizeSpec::Fixed(value) => value,
            SizeSpec::Fill => fill.and_then(|query| query().get(axis)).unwrap_or(0),
            SizeSpec::Auto => 0,
        }
    }

    pub(crate) fn render(&self, fill: Option<FillQuery<'_>>) -> Canvas {
        Canvas::new(
            Self::extent(self.width, Axis::Width, fill),
            Self::extent(self.height, Axis::Height, fill),
        )
    }
}
