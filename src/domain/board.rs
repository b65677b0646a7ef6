use super::{Cell, StepStrategy};
use crate::error::{LifeError, Result};
use rayon::prelude::*;
use tracing::trace;

/// Moore neighborhood offsets in enumeration order: left, right, up, down,
/// then the diagonals. The seeder's destructive pass depends on this order.
pub(crate) const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// In-bounds Moore neighbors of `(x, y)` on a `width x height` grid.
/// Bounded, no wraparound.
pub(crate) fn moore_neighbors(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < width && ny < height).then_some((nx, ny))
    })
}

/// Board is the row-major `width x height` grid of cells the engine steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new board with all cells dead
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Create a board whose listed coordinates are alive
    pub fn with_alive(width: usize, height: usize, alive: &[(usize, usize)]) -> Result<Self> {
        let mut board = Self::new(width, height)?;
        for &(x, y) in alive {
            board.set(x, y, Cell::Alive)?;
        }
        Ok(board)
    }

    /// Get board dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to a row-major index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(self.get_index(x, y))
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get cell at position
    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        self.check_bounds(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position.
    ///
    /// Only settled states can be written from outside a step; marks are
    /// stored as their resolved value.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        let idx = self.check_bounds(x, y)?;
        self.cells[idx] = cell.resolve();
        Ok(())
    }

    /// Number of alive cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count alive neighbors. Only `Alive` counts, so marks never leak into
    /// a neighbor's count.
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        moore_neighbors(x, y, self.width, self.height)
            .filter(|&(nx, ny)| self.cells[self.get_index(nx, ny)].is_alive())
            .count() as u8
    }

    fn mark_at(&self, idx: usize) -> Cell {
        let (x, y) = (idx % self.width, idx / self.width);
        self.cells[idx].mark(self.count_live_neighbors(x, y))
    }

    /// Compute every cell's mark from the current board without writing any.
    fn marks(&self, strategy: StepStrategy) -> Vec<Cell> {
        match strategy {
            StepStrategy::Serial => (0..self.cells.len()).map(|idx| self.mark_at(idx)).collect(),
            StepStrategy::Parallel => (0..self.cells.len())
                .into_par_iter()
                .map(|idx| self.mark_at(idx))
                .collect(),
        }
    }

    /// Advance one generation in place and return the new living count.
    ///
    /// Two sweeps: every mark is computed against the pre-step board and then
    /// written, after which a second sweep collapses `Dying` to `Dead` and
    /// `Born` to `Alive` while counting survivors.
    pub fn step(&mut self, strategy: StepStrategy) -> usize {
        let marks = self.marks(strategy);
        self.cells.copy_from_slice(&marks);

        let mut living = 0;
        for cell in &mut self.cells {
            *cell = cell.resolve();
            if cell.is_alive() {
                living += 1;
            }
        }

        trace!(width = self.width, height = self.height, living, "board stepped");
        living
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Coordinates of every alive cell, row-major
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}
