use super::LifeEngine;
use crate::error::Result;
use rand::Rng;
use tracing::info;

/// Slowest and fastest auto-run speeds, in generations per second
const MIN_SPEED: f32 = 1.0;
const MAX_SPEED: f32 = 60.0;

/// Simulation orchestrates playback of a [`LifeEngine`].
/// This is the layer a timer or keypress handler talks to.
pub struct Simulation {
    pub engine: LifeEngine,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
}

impl Simulation {
    /// Wrap an engine, paused, stepping once per second when running
    pub fn new(engine: LifeEngine) -> Self {
        Self {
            engine,
            is_running: false,
            update_timer: 0.0,
            updates_per_second: MIN_SPEED,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle auto-run. Either way the board advances once immediately.
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self.update_timer = 0.0;
        self.advance();
        self
    }

    /// Manual single step, ignored while auto-running
    pub fn step_once(mut self) -> Self {
        if !self.is_running {
            self.advance();
        }
        self
    }

    /// Set auto-run speed in generations per second (builder pattern).
    /// Non-finite rates are ignored.
    pub fn with_speed(mut self, updates_per_second: f32) -> Self {
        if updates_per_second.is_finite() {
            self.updates_per_second = updates_per_second.clamp(MIN_SPEED, MAX_SPEED);
        }
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(self, delta: f32) -> Self {
        let target = self.updates_per_second + delta;
        self.with_speed(target)
    }

    /// Seed a new board of the same size and pause
    pub fn reseed<R: Rng>(mut self, rng: &mut R) -> Result<Self> {
        self.engine.reseed(rng)?;
        self.is_running = false;
        self.update_timer = 0.0;
        info!(living = self.engine.living_count(), "board reseeded");
        Ok(self)
    }

    /// Update simulation by one frame of `delta_time` seconds
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.advance();
            self.update_timer = 0.0;
        }

        self
    }

    fn advance(&mut self) {
        let living = self.engine.step();
        if living == 0 && self.is_running {
            self.is_running = false;
            info!(generation = self.engine.generation(), "population extinct, stopping");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{presets, Board};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn blinker_simulation() -> Simulation {
        let mut board = Board::new(5, 5).unwrap();
        presets::blinker().place_on(&mut board, 2, 1).unwrap();
        Simulation::new(LifeEngine::from_board(board).unwrap())
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let sim = blinker_simulation().tick(10.0);
        assert_eq!(sim.engine.generation(), 1);
        assert_eq!(sim.update_timer, 0.0);
    }

    #[test]
    fn test_tick_steps_after_interval() {
        let sim = blinker_simulation().with_running(true).adjust_speed(1.0);
        assert_eq!(sim.updates_per_second, 2.0);

        let sim = sim.tick(0.25);
        assert_eq!(sim.engine.generation(), 1);
        let sim = sim.tick(0.25);
        assert_eq!(sim.engine.generation(), 2);
        assert_eq!(sim.update_timer, 0.0);
    }

    #[test]
    fn test_toggle_steps_immediately() {
        let sim = blinker_simulation().toggle_running();
        assert!(sim.is_running);
        assert_eq!(sim.engine.generation(), 2);

        let sim = sim.toggle_running();
        assert!(!sim.is_running);
        assert_eq!(sim.engine.generation(), 3);
    }

    #[test]
    fn test_step_once_only_when_paused() {
        let sim = blinker_simulation().step_once();
        assert_eq!(sim.engine.generation(), 2);

        let sim = sim.with_running(true).step_once();
        assert_eq!(sim.engine.generation(), 2);
    }

    #[test]
    fn test_extinction_stops_auto_run() {
        let board = Board::with_alive(3, 3, &[(1, 1)]).unwrap();
        let sim = Simulation::new(LifeEngine::from_board(board).unwrap())
            .with_running(true)
            .tick(1.0);
        assert_eq!(sim.engine.living_count(), 0);
        assert!(!sim.is_running);

        let sim = sim.tick(1.0);
        assert_eq!(sim.engine.generation(), 2);
    }

    #[test]
    fn test_speed_is_clamped() {
        let sim = blinker_simulation().adjust_speed(-5.0);
        assert_eq!(sim.updates_per_second, 1.0);
        let sim = sim.adjust_speed(100.0);
        assert_eq!(sim.updates_per_second, 60.0);
    }

    #[test]
    fn test_with_speed_clamps() {
        assert_eq!(blinker_simulation().with_speed(0.1).updates_per_second, 1.0);
        assert_eq!(blinker_simulation().with_speed(24.0).updates_per_second, 24.0);
    }

    #[test]
    fn test_non_finite_speed_is_ignored() {
        let sim = blinker_simulation().with_speed(12.0);
        let sim = sim.with_speed(f32::NAN).adjust_speed(f32::INFINITY);
        assert_eq!(sim.updates_per_second, 12.0);

        let sim = sim.with_running(true).tick(1.0 / 12.0);
        assert_eq!(sim.engine.generation(), 2);
    }

    #[test]
    fn test_reseed_pauses() {
        let sim = blinker_simulation()
            .toggle_running()
            .reseed(&mut StdRng::seed_from_u64(8))
            .unwrap();
        assert!(!sim.is_running);
        assert_eq!(sim.engine.generation(), 1);
        assert_eq!(sim.engine.dimensions(), (5, 5));
    }
}
