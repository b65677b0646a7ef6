use crate::domain::{seed, Board, Color, ColorAgeTracker, StepStrategy};
use crate::error::Result;
use rand::Rng;
use tracing::{debug, trace};

/// LifeEngine owns a board and its color buffer and advances them together.
///
/// The board and colors are only mutated through [`LifeEngine::step`] and
/// [`LifeEngine::reseed`]; everything else is a read-only view for the
/// renderer.
pub struct LifeEngine {
    board: Board,
    colors: ColorAgeTracker,
    generation: u64,
    living: usize,
    strategy: StepStrategy,
}

impl LifeEngine {
    /// Create an engine on a freshly seeded `width x height` board
    pub fn new<R: Rng>(width: usize, height: usize, rng: &mut R) -> Result<Self> {
        Self::from_board(seed(width, height, rng)?)
    }

    /// Create an engine from a hand-built board
    pub fn from_board(board: Board) -> Result<Self> {
        let (width, height) = board.dimensions();
        let mut colors = ColorAgeTracker::new(width, height)?;
        colors.apply(&board);
        let living = board.living_count();

        debug!(width, height, living, "engine created");
        Ok(Self {
            board,
            colors,
            generation: 1,
            living,
            strategy: StepStrategy::default(),
        })
    }

    /// Select the step strategy (builder pattern)
    pub fn with_strategy(mut self, strategy: StepStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> StepStrategy {
        self.strategy
    }

    /// Replace the board with a fresh seed of the same size.
    /// Colors and the generation counter start over.
    pub fn reseed<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let (width, height) = self.board.dimensions();
        self.board = seed(width, height, rng)?;
        self.colors.clear();
        self.colors.apply(&self.board);
        self.living = self.board.living_count();
        self.generation = 1;
        Ok(())
    }

    /// Advance one generation: step the board, age the colors, bump the
    /// generation counter. Returns the new living count.
    pub fn step(&mut self) -> usize {
        self.living = self.board.step(self.strategy);
        self.colors.apply(&self.board);
        self.generation += 1;

        trace!(generation = self.generation, living = self.living, "generation advanced");
        self.living
    }

    /// Displayed color of the cell at `(x, y)`
    pub fn color_at(&self, x: usize, y: usize) -> Result<Color> {
        self.colors.color_at(x, y)
    }

    /// Row-major color buffer, one entry per cell
    pub fn colors(&self) -> &[Color] {
        self.colors.colors()
    }

    pub fn living_count(&self) -> usize {
        self.living
    }

    /// Current generation, starting at 1
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.board.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{presets, Cell};
    use crate::error::LifeError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn blinker_engine() -> LifeEngine {
        let board = Board::with_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        LifeEngine::from_board(board).unwrap()
    }

    #[test]
    fn test_new_engine_state() {
        let engine = blinker_engine();
        assert_eq!(engine.generation(), 1);
        assert_eq!(engine.living_count(), 3);
        assert_eq!(engine.color_at(2, 2), Ok(Color::NEWLY_BORN));
        assert_eq!(engine.color_at(0, 0), Ok(Color::DEAD));
        assert_eq!(engine.colors().len(), 25);
    }

    #[test]
    fn test_strategy_defaults_to_serial() {
        assert_eq!(blinker_engine().strategy(), StepStrategy::Serial);
        let engine = blinker_engine().with_strategy(StepStrategy::Parallel);
        assert_eq!(engine.strategy(), StepStrategy::Parallel);
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            LifeEngine::new(0, 10, &mut rng),
            Err(LifeError::InvalidDimension { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_blinker_scenario() {
        let mut engine = blinker_engine();

        assert_eq!(engine.step(), 3);
        assert_eq!(engine.generation(), 2);
        assert_eq!(engine.board().alive_cells(), vec![(1, 2), (2, 2), (3, 2)]);
        // Center stays alive and ages, the ends are reborn
        assert_eq!(engine.color_at(2, 2), Ok(Color::rgb(151, 0, 0)));
        assert_eq!(engine.color_at(1, 2), Ok(Color::NEWLY_BORN));
        assert_eq!(engine.color_at(2, 1), Ok(Color::DEAD));

        assert_eq!(engine.step(), 3);
        assert_eq!(engine.generation(), 3);
        assert_eq!(engine.board().alive_cells(), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(engine.color_at(2, 2), Ok(Color::rgb(152, 0, 0)));
    }

    #[test]
    fn test_extinct_board_stays_extinct() {
        let board = Board::with_alive(4, 4, &[(0, 0)]).unwrap();
        let mut engine = LifeEngine::from_board(board).unwrap();
        assert_eq!(engine.step(), 0);
        assert_eq!(engine.step(), 0);
        assert_eq!(engine.generation(), 3);
        assert!(engine.colors().iter().all(|&c| c == Color::DEAD));
    }

    #[test]
    fn test_living_count_matches_board() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut engine = LifeEngine::new(30, 20, &mut rng).unwrap();
        for _ in 0..15 {
            let living = engine.step();
            assert_eq!(living, engine.board().living_count());
            assert!(living <= 30 * 20);
            let lit = engine.colors().iter().filter(|&&c| c != Color::DEAD).count();
            assert_eq!(lit, living);
        }
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = LifeEngine::new(24, 24, &mut StdRng::seed_from_u64(5)).unwrap();
        let mut b = LifeEngine::new(24, 24, &mut StdRng::seed_from_u64(5))
            .unwrap()
            .with_strategy(StepStrategy::Parallel);
        for _ in 0..10 {
            assert_eq!(a.step(), b.step());
            assert_eq!(a.board(), b.board());
            assert_eq!(a.colors(), b.colors());
        }
    }

    #[test]
    fn test_reseed_resets_generation_and_colors() {
        let mut board = Board::new(8, 8).unwrap();
        presets::block().place_on(&mut board, 3, 3).unwrap();
        let mut engine = LifeEngine::from_board(board).unwrap();
        engine.step();
        engine.step();
        assert_eq!(engine.generation(), 3);

        engine.reseed(&mut StdRng::seed_from_u64(21)).unwrap();
        let expected = seed(8, 8, &mut StdRng::seed_from_u64(21)).unwrap();
        assert_eq!(engine.generation(), 1);
        assert_eq!(engine.board(), &expected);
        assert_eq!(engine.living_count(), expected.living_count());
        for (x, y, cell) in expected.iter_cells() {
            let color = engine.color_at(x, y).unwrap();
            match cell {
                Cell::Alive => assert_eq!(color, Color::NEWLY_BORN),
                _ => assert_eq!(color, Color::DEAD),
            }
        }
    }

    #[test]
    fn test_color_at_out_of_bounds() {
        let engine = blinker_engine();
        assert!(matches!(engine.color_at(5, 0), Err(LifeError::OutOfBounds { .. })));
    }
}
