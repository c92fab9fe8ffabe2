//! Configuration error type.

use std::error::Error;
use std::fmt;

/// Errors detected while validating solver configuration.
///
/// Returned by the `validate()` methods on the config structs in
/// [`crate::config`]. Construction of a solver rejects invalid
/// configuration up front rather than diverging mid-solve.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Discount factor is outside the open interval `(0, 1)`.
    InvalidDiscount {
        /// The rejected value.
        value: f64,
    },
    /// The policy-evaluation sweep budget is zero.
    ZeroEvalSweeps,
    /// The outer policy-improvement ceiling is zero.
    ZeroImprovementRounds,
    /// Drift probabilities are negative or do not sum to 1.
    InvalidDrift {
        /// Probability of landing in the intended cell.
        forward: f64,
        /// Probability of each perpendicular slip.
        lateral: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDiscount { value } => {
                write!(f, "discount must be in (0, 1), got {value}")
            }
            Self::ZeroEvalSweeps => write!(f, "eval_sweeps must be at least 1"),
            Self::ZeroImprovementRounds => {
                write!(f, "max_improvement_rounds must be at least 1")
            }
            Self::InvalidDrift { forward, lateral } => {
                write!(
                    f,
                    "drift probabilities must be non-negative and sum to 1, \
                     got forward={forward} lateral={lateral}"
                )
            }
        }
    }
}

impl Error for ConfigError {}
