//! Color-aging for living cells.
//!
//! A cell's displayed color encodes how long it has been continuously alive:
//! newly born cells start dark red and brighten one channel step per
//! generation (red, then green, then blue) until they saturate at white.

use super::Board;
use crate::error::{LifeError, Result};

/// An opaque RGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Background color of a dead cell
    pub const DEAD: Color = Color::rgb(0, 0, 0);
    /// First color of a cell that just came alive
    pub const NEWLY_BORN: Color = Color::rgb(150, 0, 0);
    /// Final color of a long-lived cell
    pub const SATURATED: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// One generation older: bump the first unsaturated channel by one.
    pub const fn aged(self) -> Self {
        let Color { r, g, b } = self;
        if r < u8::MAX {
            Color::rgb(r + 1, g, b)
        } else if g < u8::MAX {
            Color::rgb(r, g + 1, b)
        } else if b < u8::MAX {
            Color::rgb(r, g, b + 1)
        } else {
            self
        }
    }

    pub const fn is_saturated(self) -> bool {
        self.r == u8::MAX && self.g == u8::MAX && self.b == u8::MAX
    }
}

/// Displayed color plus whether the cell was alive at the last update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ColorAge {
    pub color: Color,
    pub alive: bool,
}

impl ColorAge {
    /// Next displayed state given whether the cell is alive now.
    /// Decided from the previous color alone.
    pub fn next(self, alive: bool) -> Self {
        let color = if !alive {
            Color::DEAD
        } else if self.color == Color::DEAD {
            Color::NEWLY_BORN
        } else {
            self.color.aged()
        };
        Self { color, alive }
    }
}

/// Per-cell display colors, kept in lockstep with a board of the same size.
#[derive(Clone, Debug)]
pub struct ColorAgeTracker {
    width: usize,
    height: usize,
    cells: Vec<ColorAge>,
    /// Flat copy of the colors, handed to renderers as one slice
    colors: Vec<Color>,
}

impl ColorAgeTracker {
    /// Every cell starts with the dead color.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![ColorAge::default(); width * height],
            colors: vec![Color::DEAD; width * height],
        })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Advance every cell's color from the board's current alive/dead state.
    pub fn update(&mut self, board: &Board) -> Result<()> {
        if board.dimensions() != self.dimensions() {
            return Err(LifeError::DimensionMismatch {
                expected: self.dimensions(),
                actual: board.dimensions(),
            });
        }
        self.apply(board);
        Ok(())
    }

    /// Update without the dimension check, for callers that own both buffers.
    pub(crate) fn apply(&mut self, board: &Board) {
        debug_assert_eq!(board.dimensions(), self.dimensions());
        for ((age, color), cell) in self
            .cells
            .iter_mut()
            .zip(self.colors.iter_mut())
            .zip(board.cells())
        {
            *age = age.next(cell.is_alive());
            *color = age.color;
        }
    }

    /// Reset every cell to the dead color
    pub fn clear(&mut self) {
        self.cells.fill(ColorAge::default());
        self.colors.fill(Color::DEAD);
    }

    /// Displayed color at position
    pub fn color_at(&self, x: usize, y: usize) -> Result<Color> {
        if x < self.width && y < self.height {
            Ok(self.colors[y * self.width + x])
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Full record at position
    pub fn age_at(&self, x: usize, y: usize) -> Result<ColorAge> {
        self.color_at(x, y).map(|_| self.cells[y * self.width + x])
    }

    /// Row-major color buffer
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
