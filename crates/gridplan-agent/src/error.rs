//! Error type for adapter setup and decision cycles.

use gridplan_core::{Cell, ConfigError};
use gridplan_grid::GridError;
use gridplan_solver::ModelError;
use std::error::Error;
use std::fmt;

/// Errors from constructing a [`DecisionAdapter`](crate::DecisionAdapter)
/// or running a decision cycle.
#[derive(Clone, Debug, PartialEq)]
pub enum AgentError {
    /// Solver or drift configuration failed validation.
    Config(ConfigError),
    /// The grid index could not be built from the environment's layout.
    Grid(GridError),
    /// The reward model rejected an environment-reported position.
    Model(ModelError),
    /// The agent's current position is not an open cell — the grid model
    /// and the environment disagree about the layout.
    PositionNotOpen {
        /// The reported position.
        cell: Cell,
    },
    /// The environment reported an empty legal-action set, leaving no
    /// deterministic fallback.
    NoLegalActions,
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Model(e) => write!(f, "model: {e}"),
            Self::PositionNotOpen { cell } => {
                write!(f, "current position {cell} is not an open cell")
            }
            Self::NoLegalActions => write!(f, "environment reported no legal actions"),
        }
    }
}

impl Error for AgentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for AgentError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for AgentError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ModelError> for AgentError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}
