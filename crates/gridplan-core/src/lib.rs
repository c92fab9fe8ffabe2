//! Core types and traits for the gridplan policy solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the gridplan workspace:
//! grid cells, the closed action enum, configuration structs with
//! validation, and the [`Environment`] trait through which the solver
//! observes its host.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod cell;
pub mod config;
pub mod error;
pub mod traits;

pub use action::Action;
pub use cell::Cell;
pub use config::{DriftConfig, RewardConfig, SolverConfig, ValueUpdate};
pub use error::ConfigError;
pub use traits::Environment;
