use std::fmt;

use crate::geometry::{Rect, Size};
use crate::grid::{Grid, GridError};
use crate::style::Cell;

/// Fixed-size field of styled cells, the unit every view renders into.
///
/// Coordinates are `(x, y)` = (column, row). Unlike [`Grid`], access is
/// permissive: writes outside the canvas are dropped and reads outside it
/// return a blank cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    grid: Grid<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            grid: Grid::new(height, width, Cell::blank()),
        }
    }

    pub fn with_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    /// Zero-sized canvas.
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    fn position(&self, x: isize, y: isize) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|col| *col < self.width)?;
        let row = usize::try_from(y).ok().filter(|row| *row < self.height)?;
        Some((row, col))
    }

    /// Write `cell` at `(x, y)`; out of bounds is a no-op.
    pub fn set(&mut self, x: isize, y: isize, cell: Cell) -> &mut Self {
        if let Some(slot) = self
            .position(x, y)
            .and_then(|(row, col)| self.grid.get_mut(row, col).ok())
        {
            *slot = cell;
        }
        self
    }

    /// Read `(x, y)`; out of bounds yields a blank cell.
    pub fn get(&self, x: isize, y: isize) -> Cell {
        self.position(x, y)
            .and_then(|(row, col)| self.grid.get(row, col).ok().copied())
            .unwrap_or_default()
    }

    /// Overlay `other` with its top-left at `(x, y)`, clipping to this
    /// canvas. Returns the number of clipped source cells.
    pub fn composite(&mut self, other: &Canvas, x: isize, y: isize) -> usize {
        self.grid.composite(&other.grid, x, y)
    }

    /// Replace every cell on the outer ring with `border(self, x, y)`.
    ///
    /// The interior is left untouched. Cells are visited row by row, and
    /// each callback sees the ring cells already written before it.
    pub fn apply_border(&mut self, mut border: impl FnMut(&Canvas, usize, usize) -> Cell) -> &mut Self {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_ring(x, y) {
                    let cell = border(self, x, y);
                    if let Ok(slot) = self.grid.get_mut(y, x) {
                        *slot = cell;
                    }
                }
            }
        }
        self
    }

    fn is_ring(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    /// Run an arbitrary pass over the whole canvas.
    pub fn apply_effect(&mut self, effect: impl FnOnce(&mut Canvas)) -> &mut Self {
        effect(self);
        self
    }

    /// Rewrite every cell through `f`.
    pub fn map_cells(&mut self, f: impl FnMut(&Cell) -> Cell) -> &mut Self {
        self.grid.map_in_place(f);
        self
    }

    /// Copy `rect` out as a new canvas. The rect must lie inside this canvas.
    pub fn subset(&self, rect: Rect) -> Result<Canvas, GridError> {
        let grid = self.grid.subset(rect.x, rect.y, rect.width, rect.height)?;
        Ok(Self {
            width: rect.width,
            height: rect.height,
            grid,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.grid.iter_rows()
    }

    /// Row `y` as plain characters, without styling.
    pub fn row_text(&self, y: usize) -> Option<String> {
        self.grid
            .row(y)
            .ok()
            .map(|row| row.iter().map(Cell::ch).collect())
    }

    /// All rows as plain characters.
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(Cell::ch).collect())
            .collect()
    }

    /// Flatten to a printable string: each cell's escape form, with a line
    /// terminator after every row.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                cell.write_to(f)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
