//! Engine error types.

use thiserror::Error;

/// Errors raised by board construction and coordinate access.
///
/// Every variant is a caller bug (bad dimensions or indices), never a
/// transient condition worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Width or height was zero.
    #[error("invalid board dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },

    /// Coordinate outside the board.
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Color tracker and board disagree on dimensions.
    #[error("expected a {expected:?} board, got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

pub type Result<T> = std::result::Result<T, LifeError>;
