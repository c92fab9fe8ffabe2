//! Solver configuration and validation.
//!
//! Every reward, drift, and iteration constant is injected configuration
//! with a validated default rather than hard-coded in the solver, so one
//! solver serves any shaping variant.

use crate::error::ConfigError;

// ── RewardConfig ───────────────────────────────────────────────────

/// Reward constants applied when rebuilding the reward field.
///
/// Precedence when several apply to one cell: hazard-occupied overrides
/// hazard-adjacent overrides bonus overrides consumable overrides
/// background. The background value is a per-step cost, so it should be
/// slightly negative to keep the agent moving.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardConfig {
    /// Default reward for an open cell with nothing on it. Default: -1.
    pub background: f64,
    /// Reward for a cell holding a regular consumable. Default: 10.
    pub consumable: f64,
    /// Reward for a cell holding a rare high-value consumable. Default: 20.
    pub bonus: f64,
    /// Reward for a cell occupied by a hazard. Default: -100.
    pub hazard: f64,
    /// Reward for an open cell orthogonally adjacent to a hazard.
    /// Compensates for the one-step lookahead of the value computation.
    /// Default: -50.
    pub hazard_adjacent: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            background: -1.0,
            consumable: 10.0,
            bonus: 20.0,
            hazard: -100.0,
            hazard_adjacent: -50.0,
        }
    }
}

// ── DriftConfig ────────────────────────────────────────────────────

/// Probabilities for the stochastic transition model.
///
/// An intended move lands in the target neighbour with probability
/// `forward` and slips into each of the two perpendicular neighbours
/// with probability `lateral`. The reverse direction carries zero mass,
/// so `forward + 2 * lateral` must equal 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriftConfig {
    /// Probability the intended move succeeds. Default: 0.8.
    pub forward: f64,
    /// Probability of each perpendicular slip. Default: 0.1.
    pub lateral: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            forward: 0.8,
            lateral: 0.1,
        }
    }
}

impl DriftConfig {
    /// Tolerance for the probability-sum check.
    const SUM_EPSILON: f64 = 1e-9;

    /// Check that the probabilities are non-negative and sum to 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.forward + 2.0 * self.lateral;
        if self.forward < 0.0 || self.lateral < 0.0 || (sum - 1.0).abs() > Self::SUM_EPSILON {
            return Err(ConfigError::InvalidDrift {
                forward: self.forward,
                lateral: self.lateral,
            });
        }
        Ok(())
    }
}

// ── ValueUpdate ────────────────────────────────────────────────────

/// Value-update strategy for policy-evaluation sweeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueUpdate {
    /// Update values in place during the sweep (Gauss-Seidel). Later
    /// cells in the sweep see the already-updated values of earlier
    /// cells, which typically converges in fewer sweeps.
    #[default]
    InPlace,
    /// Compute the whole sweep from a frozen copy of the value table
    /// (Jacobi), then swap.
    Synchronous,
}

// ── SolverConfig ───────────────────────────────────────────────────

/// Configuration for policy-iteration runs.
///
/// `eval_sweeps` is a hard iteration budget, not a convergence tolerance:
/// evaluation always runs exactly this many sweeps. The outer
/// evaluation/improvement loop is bounded by `max_improvement_rounds`;
/// on exceeding it the solver falls back to the best policy seen so far
/// instead of looping indefinitely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Discount factor in `(0, 1)`. A low default (0.5) encodes a strong
    /// preference for near-term reward given the fast-changing reward
    /// landscape. Default: 0.5.
    pub discount: f64,
    /// Number of evaluation sweeps per round. Default: 20.
    pub eval_sweeps: usize,
    /// Ceiling on evaluation/improvement rounds. Default: 50.
    pub max_improvement_rounds: usize,
    /// Value-update strategy during evaluation sweeps.
    pub update: ValueUpdate,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            discount: 0.5,
            eval_sweeps: 20,
            max_improvement_rounds: 50,
            update: ValueUpdate::default(),
        }
    }
}

impl SolverConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.discount.is_finite() || self.discount <= 0.0 || self.discount >= 1.0 {
            return Err(ConfigError::InvalidDiscount {
                value: self.discount,
            });
        }
        if self.eval_sweeps == 0 {
            return Err(ConfigError::ZeroEvalSweeps);
        }
        if self.max_improvement_rounds == 0 {
            return Err(ConfigError::ZeroImprovementRounds);
        }
        Ok(())
    }
}
