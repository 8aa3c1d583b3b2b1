use super::direction::Direction;

/// A single square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell in a direction. May lie off the board.
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The fixed 10x10 playing field. Carries no state, only its extents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board;

impl Board {
    pub const WIDTH: i32 = 10;
    pub const HEIGHT: i32 = 10;
    pub const CELLS: usize = (Self::WIDTH * Self::HEIGHT) as usize;

    /// Check if a cell is within [0, WIDTH) x [0, HEIGHT)
    pub fn contains(&self, cell: Cell) -> bool {
        (0..Self::WIDTH).contains(&cell.x) && (0..Self::HEIGHT).contains(&cell.y)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        (0..Self::HEIGHT).flat_map(|y| (0..Self::WIDTH).map(move |x| Cell::new(x, y)))
    }
}
