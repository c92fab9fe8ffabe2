//! Environment-facing decision adapter for the gridplan policy solver.
//!
//! [`DecisionAdapter`] owns the immutable [`GridIndex`](gridplan_grid::GridIndex)
//! and solver configuration, and nothing else: on each decision cycle it
//! pulls the current world state from the [`Environment`](gridplan_core::Environment),
//! rebuilds the reward field, runs policy iteration from scratch, and
//! returns the action for the agent's current cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adapter;
pub mod error;

pub use adapter::{DecisionAdapter, PlannerConfig};
pub use error::AgentError;
