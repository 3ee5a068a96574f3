use crate::canvas::Canvas;
use crate::error::{Axis, Result};
use crate::geometry::Size;

use super::core::{
    Alignment, Direction, FillQuery, Justification, SizeSpec, View, forward, resolve_axis,
};
use super::settings::RenderPass;

/// Flows its children along one axis.
///
/// Sizing happens in two directions. Fixed and Fill axes are resolved
/// top-down before any child renders, so Fill children can ask for them.
/// Auto axes are then computed bottom-up from the rendered children: the
/// main axis as the sum of child extents plus spacing, the cross axis as the
/// widest child.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Container {
    pub children: Vec<View>,
    pub direction: Direction,
    pub alignment: Alignment,
    pub justification: Justification,
    pub spacing: usize,
    pub width: SizeSpec,
    pub height: SizeSpec,
    pub debug_bg: bool,
}

impl Container {
    pub const KIND: &'static str = "container";

    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = View>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_justification(mut self, justification: Justification) -> Self {
        self.justification = justification;
        self
    }

    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
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

    pub fn with_debug_bg(mut self, enabled: bool) -> Self {
        self.debug_bg = enabled;
        self
    }

    pub(crate) fn render(&self, pass: &mut RenderPass<'_>, fill: Option<FillQuery<'_>>) -> Result<Canvas> {
        let width = resolve_axis(self.width, Axis::Width, Self::KIND, fill)?;
        let height = resolve_axis(self.height, Axis::Height, Self::KIND, fill)?;

        let report = || forward(width, height, fill);
        let report: FillQuery<'_> = &report;

        let mut rendered = Vec::with_capacity(self.children.len());
        for child in &self.children {
            rendered.push(pass.render_child(child, Some(report))?);
        }

        let (natural_main, natural_cross) = self.natural_extents(&rendered);
        let natural = match self.direction {
            Direction::Rows => Size::new(natural_cross, natural_main),
            Direction::Columns => Size::new(natural_main, natural_cross),
        };
        let size = Size::new(
            width.unwrap_or(natural.width),
            height.unwrap_or(natural.height),
        );

        let mut canvas = Canvas::with_size(size);
        let (main_extent, cross_extent) = self.direction.split(size);
        let mut cursor = self.justification.leading_offset(main_extent) as isize;

        for child in &rendered {
            let (child_main, child_cross) = self.direction.split(child.size());
            let cross = self.alignment.offset(cross_extent, child_cross);
            let (x, y) = self.direction.join(cursor, cross);
            pass.composite(&mut canvas, child, x, y);
            cursor = cursor.saturating_add((child_main + self.spacing) as isize);
        }

        Ok(canvas)
    }

    fn natural_extents(&self, rendered: &[Canvas]) -> (usize, usize) {
        let gaps = self.spacing * rendered.len().saturating_sub(1);
        let main: usize = rendered
            .iter()
            .map(|child| self.direction.split(child.size()).0)
            .sum();
        let cross = rendered
            .iter()
            .map(|child| self.direction.split(child.size()).1)
            .max()
            .unwrap_or(0);
        (main + gaps, cross)
    }
}
