mod engine;
mod simulation;

pub use engine::LifeEngine;
pub use simulation::Simulation;
