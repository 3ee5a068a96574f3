use thiserror::Error;

/// Which dimension a bulk write targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row,
    Column,
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row => f.write_str("row"),
            Line::Column => f.write_str("column"),
        }
    }
}

/// Errors raised by strict grid access and bulk writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("index ({row}, {col}) outside {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("{line} {index} outside grid with {limit} {line}s")]
    LineOutOfBounds { line: Line, index: usize, limit: usize },
    #[error("{line} write of {actual} values, expected exactly {expected}")]
    LengthMismatch {
        line: Line,
        expected: usize,
        actual: usize,
    },
    #[error("{line} slice of {len} values at {start} overflows length {limit}")]
    SliceOverflow {
        line: Line,
        start: usize,
        len: usize,
        limit: usize,
    },
    #[error("region {width}x{height} at ({x}, {y}) leaves {rows}x{cols} grid")]
    RegionOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        rows: usize,
        cols: usize,
    },
}

/// Row-major 2D container with strict indexing.
///
/// `get`/`set` and the bulk row/column operations reject out-of-range
/// indices. `composite` is the exception: it clips, so an oversized or
/// offset overlay never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a `rows` x `cols` grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Build a grid from row vectors. Every row must have the first row's length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for row in rows {
            if row.len() != cols {
                return Err(GridError::LengthMismatch {
                    line: Line::Row,
                    expected: cols,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn check_row(&self, row: usize) -> Result<(), GridError> {
        if row < self.rows {
            Ok(())
        } else {
            Err(GridError::LineOutOfBounds {
                line: Line::Row,
                index: row,
                limit: self.rows,
            })
        }
    }

    fn check_col(&self, col: usize) -> Result<(), GridError> {
        if col < self.cols {
            Ok(())
        } else {
            Err(GridError::LineOutOfBounds {
                line: Line::Column,
                index: col,
                limit: self.cols,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T, GridError> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, GridError> {
        let idx = self.index(row, col)?;
        Ok(&mut self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<&[T], GridError> {
        self.check_row(row)?;
        let start = row * self.cols;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Replace a whole row. `values` must hold exactly `cols` items.
    pub fn set_row(&mut self, row: usize, values: &[T]) -> Result<(), GridError> {
        self.check_row(row)?;
        if values.len() != self.cols {
            return Err(GridError::LengthMismatch {
                line: Line::Row,
                expected: self.cols,
                actual: values.len(),
            });
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols].clone_from_slice(values);
        Ok(())
    }

    pub fn col(&self, col: usize) -> Result<Vec<T>, GridError> {
        self.check_col(col)?;
        Ok((0..self.rows)
            .map(|row| self.cells[row * self.cols + col].clone())
            .collect())
    }

    /// Replace a whole column. `values` must hold exactly `rows` items.
    pub fn set_col(&mut self, col: usize, values: &[T]) -> Result<(), GridError> {
        self.check_col(col)?;
        if values.len() != self.rows {
            return Err(GridError::LengthMismatch {
                line: Line::Column,
                expected: self.rows,
                actual: values.len(),
            });
        }
        for (row, value) in values.iter().enumerate() {
            self.cells[row * self.cols + col] = value.clone();
        }
        Ok(())
    }

    /// Write `values` into `row` starting at column `start`.
    pub fn put_row_slice(&mut self, row: usize, start: usize, values: &[T]) -> Result<(), GridError> {
        self.check_row(row)?;
        if start.saturating_add(values.len()) > self.cols {
            return Err(GridError::SliceOverflow {
                line: Line::Row,
                start,
                len: values.len(),
                limit: self.cols,
            });
        }
        let offset = row * self.cols + start;
        self.cells[offset..offset + values.len()].clone_from_slice(values);
        Ok(())
    }

    /// Write `values` down `col` starting at row `start`.
    ///
    /// Equivalent to transposing, calling [`Grid::put_row_slice`] and
    /// transposing back.
    pub fn put_col_slice(&mut self, col: usize, start: usize, values: &[T]) -> Result<(), GridError> {
        self.check_col(col)?;
        if start.saturating_add(values.len()) > self.rows {
            return Err(GridError::SliceOverflow {
                line: Line::Column,
                start,
                len: values.len(),
                limit: self.rows,
            });
        }
        for (offset, value) in values.iter().enumerate() {
            self.cells[(start + offset) * self.cols + col] = value.clone();
        }
        Ok(())
    }

    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Swap rows and columns in place.
    pub fn transpose(&mut self) {
        let mut transposed = Vec::with_capacity(self.cells.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                transposed.push(self.cells[row * self.cols + col].clone());
            }
        }
        self.cells = transposed;
        std::mem::swap(&mut self.rows, &mut self.cols);
    }

    /// Copy the `width` x `height` region whose top-left is column `x`, row `y`.
    pub fn subset(&self, x: usize, y: usize, width: usize, height: usize) -> Result<Self, GridError> {
        if x.saturating_add(width) > self.cols || y.saturating_add(height) > self.rows {
            return Err(GridError::RegionOutOfRange {
                x,
                y,
                width,
                height,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut cells = Vec::with_capacity(width * height);
        for row in y..y + height {
            let start = row * self.cols + x;
            cells.extend_from_slice(&self.cells[start..start + width]);
        }
        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Overlay `other` with its top-left at column `x`, row `y`.
    ///
    /// Source cells that land outside `self` are skipped. Returns how many
    /// source cells were clipped.
    pub fn composite(&mut self, other: &Grid<T>, x: isize, y: isize) -> usize {
        let mut clipped = 0;
        for row in 0..other.rows {
            let Some(dest_row) = offset_index(y, row, self.rows) else {
                clipped += other.cols;
                continue;
            };
            for col in 0..other.cols {
                match offset_index(x, col, self.cols) {
                    Some(dest_col) => {
                        self.cells[dest_row * self.cols + dest_col] =
                            other.cells[row * other.cols + col].clone();
                    }
                    None => clipped += 1,
                }
            }
        }
        clipped
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Apply `f` to every cell in place.
    pub fn map_in_place(&mut self, mut f: impl FnMut(&T) -> T) {
        for cell in self.cells.iter_mut() {
            *cell = f(cell);
        }
    }
}

fn offset_index(origin: isize, step: usize, limit: usize) -> Option<usize> {
    let step = isize::try_from(step).ok()?;
    let target = origin.checked_add(step)?;
    usize::try_from(target).ok().filter(|idx| *idx < limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(rows: usize, cols: usize) -> Grid<usize> {
        let mut grid = Grid::new(rows, cols, 0);
        for row in 0..rows {
            for col in 0..cols {
                grid.set(row, col, row * 10 + col).unwrap();
            }
        }
        grid
    }

    #[test]
    fn new_grid_is_filled() {
        let grid = Grid::new(3, 4, 'x');
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert!(grid.iter_rows().all(|row| row.iter().all(|c| *c == 'x')));
    }

    #[test]
    fn strict_access_rejects_out_of_range() {
        let mut grid = Grid::new(2, 2, 0u8);
        assert_eq!(
            grid.get(2, 0),
            Err(GridError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
        assert!(grid.set(0, 5, 1).is_err());
        assert!(grid.row(2).is_err());
        assert!(grid.col(2).is_err());
    }

    #[test]
    fn set_row_requires_exact_length() {
        let mut grid = Grid::new(2, 3, 0);
        assert_eq!(
            grid.set_row(0, &[1, 2]),
            Err(GridError::LengthMismatch {
                line: Line::Row,
                expected: 3,
                actual: 2
            })
        );
        grid.set_row(1, &[7, 8, 9]).unwrap();
        assert_eq!(grid.row(1).unwrap(), &[7, 8, 9]);
        assert_eq!(grid.row(0).unwrap(), &[0, 0, 0]);
    }

    #[test]
    fn set_col_requires_exact_length() {
        let mut grid = Grid::new(3, 2, 0);
        assert!(grid.set_col(1, &[1, 2, 3, 4]).is_err());
        grid.set_col(1, &[4, 5, 6]).unwrap();
        assert_eq!(grid.col(1).unwrap(), vec![4, 5, 6]);
        assert_eq!(grid.col(0).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn put_row_slice_checks_overflow() {
        let mut grid = Grid::new(1, 5, 0);
        grid.put_row_slice(0, 2, &[1, 2, 3]).unwrap();
        assert_eq!(grid.row(0).unwrap(), &[0, 0, 1, 2, 3]);
        assert_eq!(
            grid.put_row_slice(0, 3, &[1, 2, 3]),
            Err(GridError::SliceOverflow {
                line: Line::Row,
                start: 3,
                len: 3,
                limit: 5
            })
        );
    }

    #[test]
    fn put_col_slice_matches_transposed_row_write() {
        let mut direct = numbered(4, 3);
        direct.put_col_slice(2, 1, &[91, 92]).unwrap();

        let mut via_transpose = numbered(4, 3);
        via_transpose.transpose();
        via_transpose.put_row_slice(2, 1, &[91, 92]).unwrap();
        via_transpose.transpose();

        assert_eq!(direct, via_transpose);
        assert!(direct.put_col_slice(0, 3, &[1, 2]).is_err());
    }

    #[test]
    fn transpose_swaps_dimensions() {
        let mut grid = numbered(2, 3);
        grid.transpose();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 2);
        assert_eq!(*grid.get(2, 1).unwrap(), 12);
        assert_eq!(grid.row(0).unwrap(), &[0, 10]);
    }

    #[test]
    fn subset_copies_region() {
        let grid = numbered(4, 5);
        let sub = grid.subset(1, 2, 3, 2).unwrap();
        assert_eq!(sub.rows(), 2);
        assert_eq!(sub.cols(), 3);
        assert_eq!(sub.row(0).unwrap(), &[21, 22, 23]);
        assert_eq!(sub.row(1).unwrap(), &[31, 32, 33]);
        assert!(grid.subset(3, 0, 3, 1).is_err());
    }

    #[test]
    fn composite_clips_instead_of_failing() {
        let mut dest = Grid::new(3, 3, 0);
        let src = Grid::new(2, 2, 1);

        assert_eq!(dest.composite(&src, 2, 2), 3);
        assert_eq!(*dest.get(2, 2).unwrap(), 1);
        assert_eq!(*dest.get(1, 1).unwrap(), 0);

        assert_eq!(dest.composite(&src, -1, -1), 3);
        assert_eq!(*dest.get(0, 0).unwrap(), 1);
        assert_eq!(*dest.get(0, 1).unwrap(), 0);

        assert_eq!(dest.composite(&src, 10, 0), 4);
        assert_eq!(dest.composite(&src, isize::MIN, isize::MAX), 4);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_err());
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid.col(1).unwrap(), vec![2, 4]);
    }

    #[test]
    fn empty_grid_has_no_valid_index() {
        let grid: Grid<u8> = Grid::new(0, 4, 0);
        assert!(grid.get(0, 0).is_err());
        assert_eq!(grid.iter_rows().count(), 0);
    }
}
