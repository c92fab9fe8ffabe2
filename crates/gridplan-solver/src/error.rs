//! Error type for reward-field construction.

use gridplan_core::Cell;
use std::error::Error;
use std::fmt;

/// Errors from building the per-cycle reward model.
///
/// A cell reported by the environment that lies outside the precomputed
/// open-cell set means the grid model and the environment have
/// desynchronized. Continuing with a stale grid would produce an unsafe
/// policy, so this is surfaced immediately rather than ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// An environment-reported cell is not in the open-cell set.
    UnknownCell {
        /// The offending cell.
        cell: Cell,
        /// What the environment claimed was there ("consumable",
        /// "bonus", "hazard").
        role: &'static str,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCell { cell, role } => {
                write!(f, "{role} at {cell} is not an open cell")
            }
        }
    }
}

impl Error for ModelError {}
