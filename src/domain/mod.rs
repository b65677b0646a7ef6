mod cell;
mod board;
mod color;
mod patterns;
mod seeder;
mod strategy;

pub use cell::Cell;
pub use board::Board;
pub use color::{Color, ColorAge, ColorAgeTracker};
pub use patterns::{Pattern, presets};
pub use seeder::seed;
pub use strategy::StepStrategy;
