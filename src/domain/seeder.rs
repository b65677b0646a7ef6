//! Neighbor-biased random seeding.
//!
//! Plain coin-flip seeding gives uniform noise. Here every cell draws a
//! uniform weight, then each cell suppresses its weaker neighbors in a single
//! destructive row-major pass, which leaves clusters separated by emptier
//! regions.

use super::board::moore_neighbors;
use super::{Board, Cell};
use crate::error::{LifeError, Result};
use rand::Rng;
use tracing::debug;

/// Weights at or below this are always suppressed by a heavier neighbor.
const SUPPRESS_THRESHOLD: f64 = 0.5;

/// Build a seeded `width x height` board, drawing all randomness from `rng`.
///
/// The pass is order-sensitive: comparisons read weights that earlier cells
/// may already have zeroed, so the same `rng` state always yields the same
/// board and a different traversal order would not.
pub fn seed<R: Rng>(width: usize, height: usize, rng: &mut R) -> Result<Board> {
    if width == 0 || height == 0 {
        return Err(LifeError::InvalidDimension { width, height });
    }

    let mut weights: Vec<f64> = (0..width * height).map(|_| rng.random::<f64>()).collect();

    for y in 0..height {
        for x in 0..width {
            let current = weights[y * width + x];
            for (nx, ny) in moore_neighbors(x, y, width, height) {
                let neighbor = &mut weights[ny * width + nx];
                if *neighbor < current && (*neighbor <= SUPPRESS_THRESHOLD || rng.random_bool(0.5)) {
                    *neighbor = 0.0;
                }
            }
        }
    }

    let mut board = Board::new(width, height)?;
    for (idx, &weight) in weights.iter().enumerate() {
        // Round half to even: a weight of exactly 0.5 rounds down.
        if weight > SUPPRESS_THRESHOLD {
            board.set(idx % width, idx / width, Cell::Alive)?;
        }
    }

    debug!(width, height, living = board.living_count(), "seeded board");
    Ok(board)
}
