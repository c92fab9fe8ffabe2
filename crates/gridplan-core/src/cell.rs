//! Discrete grid coordinates.

use crate::action::Action;
use std::fmt;

/// A discrete grid coordinate.
///
/// `x` grows eastward and `y` grows northward, so `North` is `y + 1` and
/// `South` is `y - 1`. Identity is structural: two cells with equal
/// coordinates are the same cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column coordinate (grows eastward).
    pub x: i32,
    /// Row coordinate (grows northward).
    pub y: i32,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step in the given direction, ignoring grid bounds.
    ///
    /// Callers that need traversability must check the result against a
    /// grid index; this is pure coordinate arithmetic.
    pub fn step(self, action: Action) -> Cell {
        let (dx, dy) = action.offset();
        Cell::new(self.x + dx, self.y + dy)
    }

    /// The four orthogonal neighbours in `[North, East, South, West]` order.
    pub fn neighbours(self) -> [Cell; 4] {
        [
            self.step(Action::North),
            self.step(Action::East),
            self.step(Action::South),
            self.step(Action::West),
        ]
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
