use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// The fixed playfield. All movement arithmetic is toroidal: leaving one
/// edge re-enters from the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Cell reached from `cell` by `delta`, wrapping at the edges.
    /// `rem_euclid` keeps the result non-negative for negative deltas.
    pub fn wrap(&self, cell: Cell, delta: (i32, i32)) -> Cell {
        Cell::new(
            (cell.col + delta.0).rem_euclid(self.width as i32),
            (cell.row + delta.1).rem_euclid(self.height as i32),
        )
    }

    /// One step from `cell` in `direction`
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        self.wrap(cell, direction.delta())
    }

    /// The spawn/reset cell
    pub fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.col < self.width as i32
            && cell.row >= 0
            && cell.row < self.height as i32
    }
}
