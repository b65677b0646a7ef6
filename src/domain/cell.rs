/// Cell represents one square of the board.
///
/// Between steps a cell is only ever `Dead` or `Alive`. `Dying` and `Born`
/// are marks written during a step and collapsed by [`Cell::resolve`]
/// before the step returns.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
    /// Alive before this step, dead after it.
    Dying,
    /// Dead before this step, alive after it.
    Born,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// True for the two states that may exist outside a step
    pub const fn is_settled(self) -> bool {
        matches!(self, Cell::Dead | Cell::Alive)
    }

    /// Mark phase of a step:
    /// 1. Live cell with 0-1 or 4+ neighbors starts dying
    /// 2. Dead cell with exactly 3 neighbors is marked for birth
    /// 3. Everything else is left alone
    pub const fn mark(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 0 | 1) => Cell::Dying,
            (Cell::Alive, n) if n > 3 => Cell::Dying,
            (Cell::Dead, 3) => Cell::Born,
            (cell, _) => cell,
        }
    }

    /// Resolution phase of a step: collapse marks into settled states
    pub const fn resolve(self) -> Self {
        match self {
            Cell::Dying => Cell::Dead,
            Cell::Born => Cell::Alive,
            settled => settled,
        }
    }
}
