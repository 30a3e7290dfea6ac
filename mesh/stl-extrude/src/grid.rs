//! Binary occupancy grids.

use std::fmt;

use crate::error::{ExtrudeError, ExtrudeResult};

/// A row-major grid of filled/empty cells.
///
/// Row `r` and column `c` map to the output footprint cell spanning
/// `[c * x_scale, (c + 1) * x_scale] x [r * y_scale, (r + 1) * y_scale]`.
///
/// # Example
///
/// ```
/// use stl_extrude::OccupancyGrid;
///
/// let grid = OccupancyGrid::from_bitmap(b"0110", 2, 2).unwrap();
/// assert_eq!(grid.get(0, 1), Some(true));
/// assert_eq!(grid.get(1, 1), Some(false));
/// assert_eq!(grid.filled_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// An all-empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`ExtrudeError::GridTooLarge`] if `width * height` overflows.
    pub fn new(width: usize, height: usize) -> ExtrudeResult<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; len],
        })
    }

    /// Wrap a row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ExtrudeError::CellCountMismatch`] if `cells` is not exactly
    /// `width * height` long.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> ExtrudeResult<Self> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(ExtrudeError::CellCountMismatch {
                width,
                height,
                expected,
                got: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The row-major cell buffer.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Whether `(row, col)` is filled. Cells outside the grid are empty.
    #[inline]
    pub(crate) fn filled(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Set the cell at `(row, col)`.
    ///
    /// Returns `false`, changing nothing, when the cell is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, filled: bool) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = filled;
                true
            }
            None => false,
        }
    }

    /// Mark the cell at `(row, col)` empty.
    pub fn clear(&mut self, row: usize, col: usize) -> bool {
        self.set(row, col, false)
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Whether no cell is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Swap filled and empty everywhere.
    pub fn invert(&mut self) {
        for cell in &mut self.cells {
            *cell = !*cell;
        }
    }

    /// Mirror every row left to right.
    pub fn flip_horizontal(&mut self) {
        if self.width == 0 {
            return;
        }
        for row in self.cells.chunks_exact_mut(self.width) {
            row.reverse();
        }
    }

    /// A copy surrounded by a one-cell empty border.
    ///
    /// Walls are only generated between cells, never at the outer edge of
    /// the grid, so extruding a padded grid is what yields a fully enclosed
    /// solid. The footprint shifts by one cell in +X and +Y.
    ///
    /// # Errors
    ///
    /// Returns [`ExtrudeError::GridTooLarge`] if the padded size overflows.
    pub fn padded(&self) -> ExtrudeResult<Self> {
        let width = self.width.checked_add(2).ok_or(ExtrudeError::GridTooLarge {
            width: self.width,
            height: self.height,
        })?;
        let height = self.height.checked_add(2).ok_or(ExtrudeError::GridTooLarge {
            width: self.width,
            height: self.height,
        })?;

        let mut out = Self::new(width, height)?;
        for row in 0..self.height {
            let src = &self.cells[row * self.width..(row + 1) * self.width];
            let start = (row + 1) * width + 1;
            out.cells[start..start + self.width].copy_from_slice(src);
        }
        Ok(out)
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }
}

/// Renders filled cells as `#` and empty ones as `.`, one row per line.
impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                f.write_str(if self.filled(row, col) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn cell_count(width: usize, height: usize) -> ExtrudeResult<usize> {
    width
        .checked_mul(height)
        .ok_or(ExtrudeError::GridTooLarge { width, height })
}
