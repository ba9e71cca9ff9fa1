use super::snake::Snake;
use super::state::Position;

/// The fixed play field: a `width x height` rectangle of cells whose
/// outermost ring is a wall.
///
/// The grid's shape never changes after creation. Whether a cell can be
/// moved into is a derived property that depends on the snake's current
/// occupancy, so legality takes the snake as an argument instead of being
/// stored per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// True if the cell lies strictly inside the border wall
    pub fn is_interior(&self, cell: Position) -> bool {
        cell.x > 0 && cell.x < self.width - 1 && cell.y > 0 && cell.y < self.height - 1
    }

    /// Number of cells the snake could ever occupy
    pub fn interior_capacity(&self) -> usize {
        let columns = (self.width - 2).max(0) as usize;
        let rows = (self.height - 2).max(0) as usize;
        columns * rows
    }

    /// True if the cell can be moved into: strictly interior and not
    /// occupied by the snake's body or trailing tail cell. The head is not
    /// part of occupancy; the search layer handles its own exception for
    /// the goal cell.
    pub fn legal(&self, cell: Position, snake: &Snake) -> bool {
        self.is_interior(cell) && !snake.occupies(cell)
    }

    /// The four axis-aligned neighbors, without any bounds check. Callers
    /// must test `legal` (or goal equality) before using a neighbor.
    pub fn neighbors(&self, cell: Position) -> [Position; 4] {
        [
            cell.moved_by(1, 0),
            cell.moved_by(-1, 0),
            cell.moved_by(0, 1),
            cell.moved_by(0, -1),
        ]
    }
}
