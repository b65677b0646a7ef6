use super::{Board, Cell};
use crate::error::{LifeError, Result};

/// Represents a pattern that can be stamped onto a board
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Place pattern with its top-left corner at `(x, y)`.
    ///
    /// Fails without touching the board if any cell would land outside it.
    pub fn place_on(&self, board: &mut Board, x: usize, y: usize) -> Result<()> {
        let (width, height) = board.dimensions();
        let fits = |start: usize, extent: usize, limit: usize| {
            start.checked_add(extent).is_some_and(|end| end <= limit)
        };
        if !fits(x, self.width, width) || !fits(y, self.height, height) {
            return Err(LifeError::OutOfBounds { x, y, width, height });
        }
        for (dx, dy) in &self.cells {
            board.set(x + dx, y + dy, Cell::Alive)?;
        }
        Ok(())
    }

    /// Alive coordinates after shifting by `(x, y)`
    pub fn cells_at(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        self.cells.iter().map(|(dx, dy)| (x + dx, y + dy)).collect()
    }
}

/// Classic patterns for hand-built starting boards
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator, vertical phase
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Glider - moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![blinker(), block(), glider(), toad(), beacon()]
    }

    /// Look a preset up by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}
