//! Gridplan: a grid MDP policy solver for agents under stochastic
//! movement, dynamic rewards, and moving hazards.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the gridplan sub-crates. For most users, adding `gridplan` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridplan::prelude::*;
//!
//! // A 1-row corridor of five open cells with food at the far end.
//! let corners = [Cell::new(0, 0), Cell::new(4, 0)];
//! let grid = GridIndex::from_layout(&corners, &[]).unwrap();
//!
//! let field = RewardField::build(
//!     &grid,
//!     &[Cell::new(4, 0)], // consumables
//!     &[],                // bonuses
//!     &[],                // hazards
//!     &RewardConfig::default(),
//! )
//! .unwrap();
//!
//! let solver =
//!     PolicyIterationSolver::new(SolverConfig::default(), TransitionModel::default()).unwrap();
//! let (policy, stats) = solver.solve(&grid, &field);
//!
//! assert!(stats.converged);
//! assert_eq!(policy.action(Cell::new(0, 0)), Some(Action::East));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridplan-core` | `Cell`, `Action`, configuration, `Environment` |
//! | [`grid`] | `gridplan-grid` | `GridIndex` traversability index |
//! | [`solver`] | `gridplan-solver` | Reward field, transition model, policy iteration |
//! | [`agent`] | `gridplan-agent` | `DecisionAdapter` drive loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, configuration, and the `Environment` trait (`gridplan-core`).
pub use gridplan_core as types;

/// Static grid traversability index (`gridplan-grid`).
pub use gridplan_grid as grid;

/// Reward field, transition model, and policy iteration (`gridplan-solver`).
pub use gridplan_solver as solver;

/// Environment-facing decision adapter (`gridplan-agent`).
pub use gridplan_agent as agent;

/// Common imports for typical gridplan usage.
///
/// ```rust
/// use gridplan::prelude::*;
/// ```
pub mod prelude {
    // Core types and configuration
    pub use gridplan_core::{
        Action, Cell, ConfigError, DriftConfig, Environment, RewardConfig, SolverConfig,
        ValueUpdate,
    };

    // Grid index
    pub use gridplan_grid::{GridError, GridIndex};

    // Solver
    pub use gridplan_solver::{
        ModelError, Policy, PolicyIterationSolver, RewardField, SolveStats, TransitionModel,
        ValueTable,
    };

    // Adapter
    pub use gridplan_agent::{AgentError, DecisionAdapter, PlannerConfig};
}
