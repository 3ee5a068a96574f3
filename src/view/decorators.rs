use crate::canvas::{BorderStyle, Canvas, border_painter};
use crate::error::{Axis, LayoutError, Result};
use crate::style::Color;

use super::core::{FillQuery, SizeSpec, View, forward, resolve_axis};
use super::settings::RenderPass;

/// Surrounds exactly one child with blank cells on all four sides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Padded {
    pub children: Vec<View>,
    pub padding: usize,
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub debug_bg: bool,
}

impl Padded {
    pub const KIND: &'static str = "padded";

    pub fn new(child: impl Into<View>, padding: usize) -> Self {
        Self {
            children: vec![child.into()],
            padding,
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: SizeSpec) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: SizeSpec) -> Self {
        self.height = height;
        self
    }

    pub fn with_debug_bg(mut self, enabled: bool) -> Self {
        self.debug_bg = enabled;
        self
    }

    pub(crate) fn render(&self, pass: &mut RenderPass<'_>, fill: Option<FillQuery<'_>>) -> Result<Canvas> {
        let [child] = self.children.as_slice() else {
            return Err(LayoutError::ChildCount {
                kind: Self::KIND,
                found: self.children.len(),
            });
        };

        let width = resolve_axis(self.width, Axis::Width, Self::KIND, fill)?;
        let height = resolve_axis(self.height, Axis::Height, Self::KIND, fill)?;
        let inset = self.padding.saturating_mul(2);

        // The child fills whatever is left inside the padding.
        let report = || forward(width, height, fill).inset(inset);
        let content = pass.render_child(child, Some(&report))?;

        let mut canvas = Canvas::with_size(content.size().grown(self.padding));
        let offset = isize::try_from(self.padding).unwrap_or(isize::MAX);
        pass.composite(&mut canvas, &content, offset, offset);
        Ok(canvas)
    }
}

/// Frames a single content view with a box-drawing border.
///
/// The ring takes one cell on each side; `padding` adds blank cells between
/// the ring and the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bordered {
    pub content: Option<Box<View>>,
    pub padding: usize,
    pub border_color: Color,
    pub border_style: BorderStyle,
    pub debug_bg: bool,
}

impl Default for Bordered {
    fn default() -> Self {
        Self {
            content: None,
            padding: 0,
            border_color: Color::WHITE,
            border_style: BorderStyle::Light,
            debug_bg: false,
        }
    }
}

impl Bordered {
    pub const KIND: &'static str = "bordered";

    pub fn new(content: impl Into<View>) -> Self {
        Self {
            content: Some(Box::new(content.into())),
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn with_border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    pub fn with_debug_bg(mut self, enabled: bool) -> Self {
        self.debug_bg = enabled;
        self
    }

    pub(crate) fn render(&self, pass: &mut RenderPass<'_>) -> Result<Canvas> {
        let content = self
            .content
            .as_deref()
            .ok_or(LayoutError::MissingContent { kind: Self::KIND })?;
        let content = pass.render_child(content, None)?;

        let inset = self.padding.saturating_add(1);
        let mut canvas = Canvas::with_size(content.size().grown(inset));
        canvas.apply_border(border_painter(self.border_style, self.border_color));
        let offset = isize::try_from(inset).unwrap_or(isize::MAX);
        pass.composite(&mut canvas, &content, offset, offset);
        Ok(canvas)
    }
}
