//! Policy-iteration MDP solver over grid reward fields.
//!
//! The solver is a closed numeric fixed-point computation run once per
//! decision cycle: rebuild the [`RewardField`] from the current world
//! state, reset values and policy, alternate evaluation and improvement
//! until the policy stabilises, and read off the action for the agent's
//! cell. Nothing persists between cycles except the immutable grid index
//! and configuration.
//!
//! # Pipeline per decision cycle
//!
//! 1. [`RewardField::build`] — precedence-ordered reward assignment
//! 2. [`PolicyIterationSolver::solve`] — bounded evaluation/improvement
//! 3. policy lookup at the agent's current cell

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod reward;
pub mod solver;
pub mod transition;

pub use error::ModelError;
pub use reward::RewardField;
pub use solver::{Policy, PolicyIterationSolver, SolveStats, ValueTable};
pub use transition::TransitionModel;
