//! The closed set of cardinal movement actions.

use std::fmt;

/// One of the four cardinal movement actions.
///
/// The variant order is load-bearing: [`Action::ALL`] is the fixed
/// tie-break order used by policy improvement, so two actions with equal
/// expected value always resolve to the earlier variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Move one cell north (`y + 1`).
    North = 0,
    /// Move one cell east (`x + 1`).
    East = 1,
    /// Move one cell south (`y - 1`).
    South = 2,
    /// Move one cell west (`x - 1`).
    West = 3,
}

impl Action {
    /// All actions in the fixed tie-break order.
    pub const ALL: [Action; 4] = [Action::North, Action::East, Action::South, Action::West];

    /// The `(dx, dy)` offset for this action.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Action::North => (0, 1),
            Action::East => (1, 0),
            Action::South => (0, -1),
            Action::West => (-1, 0),
        }
    }

    /// The two actions perpendicular to this one, in the order the drift
    /// model assigns lateral probability mass.
    pub fn lateral(self) -> [Action; 2] {
        match self {
            Action::North | Action::South => [Action::East, Action::West],
            Action::East | Action::West => [Action::North, Action::South],
        }
    }

    /// The opposite action. Drift never lands here: the reverse direction
    /// carries zero probability.
    pub fn reverse(self) -> Action {
        match self {
            Action::North => Action::South,
            Action::East => Action::West,
            Action::South => Action::North,
            Action::West => Action::East,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::North => "North",
            Action::East => "East",
            Action::South => "South",
            Action::West => "West",
        };
        write!(f, "{name}")
    }
}
