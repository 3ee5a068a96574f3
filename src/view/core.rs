use crate::canvas::Canvas;
use crate::error::{Axis, LayoutError, Result};
use crate::geometry::Size;

use super::container::Container;
use super::decorators::{Bordered, Padded};
use super::settings::{RenderPass, RenderSettings, execute};
use super::text::{PrimitiveText, Spacer, Text};

/// How a node sizes one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeSpec {
    /// A literal number of cells.
    Fixed(usize),
    /// Whatever the nearest resolving ancestor reports.
    Fill,
    /// Computed from content.
    #[default]
    Auto,
}

/// Flow direction of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Children stacked top to bottom; the main axis is vertical.
    #[default]
    Rows,
    /// Children placed left to right; the main axis is horizontal.
    Columns,
}

impl Direction {
    /// Split a size into `(main, cross)` extents.
    pub fn split(self, size: Size) -> (usize, usize) {
        match self {
            Direction::Rows => (size.height, size.width),
            Direction::Columns => (size.width, size.height),
        }
    }

    /// Turn `(main, cross)` offsets back into `(x, y)`.
    pub fn join(self, main: isize, cross: isize) -> (isize, isize) {
        match self {
            Direction::Rows => (cross, main),
            Direction::Columns => (main, cross),
        }
    }
}

/// Placement of a child across the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    /// Cross-axis offset of a `child`-sized item inside `extent`. Negative
    /// when the child is larger; the composite clips it.
    pub fn offset(self, extent: usize, child: usize) -> isize {
        let slack = extent as isize - child as isize;
        match self {
            Alignment::Start => 0,
            Alignment::Center => slack.div_euclid(2),
            Alignment::End => slack,
        }
    }
}

/// Distribution of leftover main-axis space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Justification {
    #[default]
    Start,
    Center,
    End,
}

impl Justification {
    /// Leading main-axis offset for a run inside `extent`.
    ///
    /// Leftover space is not distributed yet, so every variant starts the
    /// run at zero.
    pub fn leading_offset(self, _extent: usize) -> usize {
        match self {
            Justification::Start | Justification::Center | Justification::End => 0,
        }
    }
}

/// Extents an ancestor can answer for. `None` means no ancestor up the
/// chain fixes that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Available {
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl Available {
    pub const fn new(width: Option<usize>, height: Option<usize>) -> Self {
        Self { width, height }
    }

    pub fn get(&self, axis: Axis) -> Option<usize> {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Shrink both known extents by `amount`.
    pub fn inset(self, amount: usize) -> Self {
        Self {
            width: self.width.map(|w| w.saturating_sub(amount)),
            height: self.height.map(|h| h.saturating_sub(amount)),
        }
    }
}

/// Callback a node uses to ask its parent for the size it resolved to.
pub type FillQuery<'a> = &'a dyn Fn() -> Available;

/// Resolve one axis of a node before its children render.
///
/// `Fixed` answers directly, `Fill` must be answered by the parent query,
/// `Auto` is left for the content to decide.
pub(crate) fn resolve_axis(
    spec: SizeSpec,
    axis: Axis,
    kind: &'static str,
    fill: Option<FillQuery<'_>>,
) -> Result<Option<usize>> {
    match spec {
        SizeSpec::Fixed(value) => Ok(Some(value)),
        SizeSpec::Auto => Ok(None),
        SizeSpec::Fill => {
            let query = fill.ok_or(LayoutError::FillWithoutParent { kind, axis })?;
            query()
                .get(axis)
                .map(Some)
                .ok_or(LayoutError::UnresolvedFill { kind, axis })
        }
    }
}

/// What a node reports to its children: its own resolved extents, falling
/// back to whatever its parent reports for axes it leaves to content.
pub(crate) fn forward(
    width: Option<usize>,
    height: Option<usize>,
    parent: Option<FillQuery<'_>>,
) -> Available {
    // At most one parent call per query keeps a Fill lookup linear in depth.
    let inherited = match (width, height) {
        (Some(_), Some(_)) => Available::default(),
        _ => parent.map(|query| query()).unwrap_or_default(),
    };
    Available {
        width: width.or(inherited.width),
        height: height.or(inherited.height),
    }
}

/// A node of the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Container(Container),
    Padded(Padded),
    Bordered(Bordered),
    Text(Text),
    PrimitiveText(PrimitiveText),
    Spacer(Spacer),
}

impl View {
    pub fn rows(children: impl IntoIterator<Item = View>) -> Self {
        Container::new(Direction::Rows).with_children(children).into()
    }

    pub fn columns(children: impl IntoIterator<Item = View>) -> Self {
        Container::new(Direction::Columns).with_children(children).into()
    }

    pub fn padded(child: impl Into<View>, padding: usize) -> Self {
        Padded::new(child, padding).into()
    }

    pub fn bordered(content: impl Into<View>) -> Self {
        Bordered::new(content).into()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Text::new(text).into()
    }

    pub fn primitive_text(text: impl Into<String>) -> Self {
        PrimitiveText::new(text).into()
    }

    pub fn spacer(width: usize, height: usize) -> Self {
        Spacer::new(SizeSpec::Fixed(width), SizeSpec::Fixed(height)).into()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            View::Container(_) => Container::KIND,
            View::Padded(_) => Padded::KIND,
            View::Bordered(_) => Bordered::KIND,
            View::Text(_) => Text::KIND,
            View::PrimitiveText(_) => PrimitiveText::KIND,
            View::Spacer(_) => Spacer::KIND,
        }
    }

    fn debug_bg(&self) -> bool {
        match self {
            View::Container(node) => node.debug_bg,
            View::Padded(node) => node.debug_bg,
            View::Bordered(node) => node.debug_bg,
            View::Text(node) => node.debug_bg,
            View::PrimitiveText(node) => node.debug_bg,
            View::Spacer(node) => node.debug_bg,
        }
    }

    /// Render the tree as a root with default settings.
    pub fn render(&self) -> Result<Canvas> {
        self.render_with(&RenderSettings::default())
    }

    pub fn render_with(&self, settings: &RenderSettings) -> Result<Canvas> {
        execute(self, settings, |canvas, _| canvas)
    }

    /// Render and flatten to the final terminal string.
    pub fn render_to_string(&self) -> Result<String> {
        self.render_to_string_with(&RenderSettings::default())
    }

    pub fn render_to_string_with(&self, settings: &RenderSettings) -> Result<String> {
        execute(self, settings, |canvas, metrics| {
            metrics.record_flatten(canvas.size().area());
            canvas.render()
        })
    }

    /// Render this node below a parent that answers `fill`.
    pub fn render_in(&self, fill: FillQuery<'_>) -> Result<Canvas> {
        let settings = RenderSettings::default();
        let mut pass = RenderPass::new_root(&settings);
        self.render_node(&mut pass, Some(fill))
    }

    pub(crate) fn render_node(&self, pass: &mut RenderPass<'_>, fill: Option<FillQuery<'_>>) -> Result<Canvas> {
        pass.metrics.record_node(pass.depth());
        let mut canvas = match self {
            View::Container(node) => node.render(pass, fill)?,
            View::Padded(node) => node.render(pass, fill)?,
            View::Bordered(node) => node.render(pass)?,
            View::Text(node) => node.render(pass, fill)?,
            View::PrimitiveText(node) => node.render(),
            View::Spacer(node) => node.render(fill),
        };
        if self.debug_bg() {
            let color = pass.settings.debug_color;
            canvas.map_cells(|cell| cell.bg_color(color));
        }
        Ok(canvas)
    }
}

impl From<Container> for View {
    fn from(node: Container) -> Self {
        View::Container(node)
    }
}

impl From<Padded> for View {
    fn from(node: Padded) -> Self {
        View::Padded(node)
    }
}

impl From<Bordered> for View {
    fn from(node: Bordered) -> Self {
        View::Bordered(node)
    }
}

impl From<Text> for View {
    fn from(node: Text) -> Self {
        View::Text(node)
    }
}

impl From<PrimitiveText> for View {
    fn from(node: PrimitiveText) -> Self {
        View::PrimitiveText(node)
    }
}

impl From<Spacer> for View {
    fn from(node: Spacer) -> Self {
        View::Spacer(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn alignment_offsets() {
        assert_eq!(Alignment::Start.offset(10, 4), 0);
        assert_eq!(Alignment::Center.offset(10, 3), 3);
        assert_eq!(Alignment::End.offset(10, 4), 6);
        assert_eq!(Alignment::Center.offset(2, 5), -2);
        assert_eq!(Alignment::End.offset(2, 5), -3);
    }

    #[test]
    fn justification_never_shifts_the_run() {
        for justification in [Justification::Start, Justification::Center, Justification::End] {
            assert_eq!(justification.leading_offset(40), 0);
        }
    }

    #[test]
    fn direction_round_trips_offsets() {
        let size = Size::new(7, 3);
        assert_eq!(Direction::Rows.split(size), (3, 7));
        assert_eq!(Direction::Columns.split(size), (7, 3));
        assert_eq!(Direction::Rows.join(1, 2), (2, 1));
        assert_eq!(Direction::Columns.join(1, 2), (1, 2));
    }

    #[test]
    fn resolve_axis_requires_a_query_for_fill() {
        let err = resolve_axis(SizeSpec::Fill, Axis::Height, "spacer", None).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::FillWithoutParent {
                axis: Axis::Height,
                ..
            }
        ));

        let open = || Available::new(Some(4), None);
        assert_eq!(
            resolve_axis(SizeSpec::Fill, Axis::Width, "text", Some(&open)).unwrap(),
            Some(4)
        );
        assert!(matches!(
            resolve_axis(SizeSpec::Fill, Axis::Height, "text", Some(&open)),
            Err(LayoutError::UnresolvedFill { .. })
        ));
        assert_eq!(resolve_axis(SizeSpec::Auto, Axis::Width, "text", None).unwrap(), None);
        assert_eq!(
            resolve_axis(SizeSpec::Fixed(3), Axis::Width, "text", None).unwrap(),
            Some(3)
        );
    }

    #[test]
    fn forward_prefers_own_extents() {
        let parent = || Available::new(Some(20), Some(5));
        assert_eq!(forward(Some(8), None, Some(&parent)), Available::new(Some(8), Some(5)));
        assert_eq!(forward(None, None, None), Available::default());
    }

    #[test]
    fn deep_auto_chain_queries_the_root_once() {
        let calls = std::cell::Cell::new(0usize);
        let root = || {
            calls.set(calls.get() + 1);
            Available::new(Some(12), Some(4))
        };

        let mut view: View = Spacer::new(SizeSpec::Fill, SizeSpec::Fill).into();
        for _ in 0..32 {
            view = View::rows([view]);
        }
        let canvas = view.render_in(&root).unwrap();

        assert_eq!(canvas.size(), Size::new(12, 4));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn debug_overlay_recolours_without_reshaping() {
        let settings = RenderSettings::default().with_debug_color(Color::BLUE);
        let nodes: [View; 3] = [
            Container::new(Direction::Columns)
                .with_spacing(1)
                .with_children([View::primitive_text("ab"), View::primitive_text("c")])
                .with_debug_bg(true)
                .into(),
            Bordered::new(View::primitive_text("xy")).with_debug_bg(true).into(),
            Spacer::new(SizeSpec::Fixed(3), SizeSpec::Fixed(2)).with_debug_bg(true).into(),
        ];

        for node in nodes {
            let plain = {
                let mut quiet = node.clone();
                match &mut quiet {
                    View::Container(inner) => inner.debug_bg = false,
                    View::Bordered(inner) => inner.debug_bg = false,
                    View::Spacer(inner) => inner.debug_bg = false,
                    _ => unreachable!(),
                }
                quiet.render().unwrap()
            };
            let overlaid = node.render_with(&settings).unwrap();

            assert_eq!(overlaid.size(), plain.size(), "{}", node.kind());
            assert_eq!(overlaid.to_plain_lines(), plain.to_plain_lines());
            assert!(overlaid.rows().flatten().all(|cell| cell.style().bg() == Color::BLUE));
            assert!(plain.rows().flatten().all(|cell| cell.style().bg() == Color::DEFAULT));
        }
    }
}
