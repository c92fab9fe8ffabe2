//! Error type for grid construction.

use gridplan_core::Cell;
use std::error::Error;
use std::fmt;

/// Errors detected while building a [`GridIndex`](crate::GridIndex).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The environment reported no corner coordinates.
    NoCorners,
    /// The bounding rectangle derived from the corners has zero area.
    EmptyGrid {
        /// Derived width (max corner x + 1).
        width: i32,
        /// Derived height (max corner y + 1).
        height: i32,
    },
    /// A wall lies outside the bounding rectangle, which indicates the
    /// corner and wall queries disagree about the layout.
    WallOutOfBounds {
        /// The offending wall cell.
        cell: Cell,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCorners => write!(f, "environment reported no corners"),
            Self::EmptyGrid { width, height } => {
                write!(f, "bounding rectangle {width}x{height} has zero area")
            }
            Self::WallOutOfBounds { cell } => {
                write!(f, "wall at {cell} lies outside the bounding rectangle")
            }
        }
    }
}

impl Error for GridError {}
