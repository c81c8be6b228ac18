//! Grid representation for Game of Life

use crate::error::LifeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board size used by the reference configuration
pub const DEFAULT_GRID_SIZE: usize = 19;

/// One generation of a bounded Game of Life board.
///
/// Cells are stored row-major. A `Grid` is never edited in place: the
/// editing helpers return a new value, and the transition engine always
/// produces a fresh generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridSnapshot", into = "GridSnapshot")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

/// Serialized form of a grid: dimensions plus row-major cells
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GridSnapshot {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn dead(rows: usize, cols: usize) -> Result<Self, LifeError> {
        let count = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; count],
        })
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, LifeError> {
        if cells.is_empty() {
            return Err(LifeError::invalid_shape("grid has no rows"));
        }

        let rows = cells.len();
        let cols = cells[0].len();

        if cols == 0 {
            return Err(LifeError::invalid_shape("grid has no columns"));
        }

        if let Some((i, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(LifeError::invalid_shape(format!(
                "row {} has length {}, expected {}",
                i,
                row.len(),
                cols
            )));
        }

        Ok(Self {
            rows,
            cols,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Build a grid from already flattened row-major cells
    pub(crate) fn from_flat(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self, LifeError> {
        let count = cell_count(rows, cols)?;
        if cells.len() != count {
            return Err(LifeError::invalid_shape(format!(
                "expected {} cells for {}x{}, found {}",
                count,
                rows,
                cols,
                cells.len()
            )));
        }

        Ok(Self { rows, cols, cells })
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell state at `(row, col)`; anything off the board is dead
    pub fn get(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.alive_at(row as usize, col as usize)
    }

    /// Unsigned form of [`get`](Self::get)
    pub(crate) fn alive_at(&self, row: usize, col: usize) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Return a copy with one cell set to `alive`
    pub fn with_cell(&self, row: usize, col: usize, alive: bool) -> Result<Self, LifeError> {
        self.check_bounds(row, col)?;
        let mut next = self.clone();
        let idx = next.index(row, col);
        next.cells[idx] = alive;
        Ok(next)
    }

    /// Return a copy with one cell flipped
    pub fn toggled(&self, row: usize, col: usize) -> Result<Self, LifeError> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.with_cell(row, col, !self.cells[idx])
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), LifeError> {
        if row >= self.rows || col >= self.cols {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Copy the cells back out as a 2D array
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }
}

/// Cells in a `rows` x `cols` board; both sides must be positive and the
/// product must fit in memory
fn cell_count(rows: usize, cols: usize) -> Result<usize, LifeError> {
    if rows == 0 || cols == 0 {
        return Err(LifeError::invalid_shape(format!(
            "dimensions must be positive, got {}x{}",
            rows, cols
        )));
    }

    rows.checked_mul(cols)
        .filter(|&count| count <= isize::MAX as usize)
        .ok_or_else(|| LifeError::invalid_shape(format!("{}x{} board is too large", rows, cols)))
}

impl TryFrom<GridSnapshot> for Grid {
    type Error = LifeError;

    fn try_from(snapshot: GridSnapshot) -> Result<Self, Self::Error> {
        Grid::from_flat(snapshot.rows, snapshot.cols, snapshot.cells)
    }
}

impl From<Grid> for GridSnapshot {
    fn from(grid: Grid) -> Self {
        Self {
            rows: grid.rows,
            cols: grid.cols,
            cells: grid.cells,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for &cell in row {
                write!(f, "{}", if cell { 'O' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
