// Domain layer - Cells, board stepping, seeding, color aging
pub mod domain;

// Application layer - Engine and playback coordination
pub mod application;

pub mod error;

// Re-exports for convenience
pub use domain::{seed, Board, Cell, Color, ColorAgeTracker, Pattern, StepStrategy, presets};
pub use application::{LifeEngine, Simulation};
pub use error::{LifeError, Result};
