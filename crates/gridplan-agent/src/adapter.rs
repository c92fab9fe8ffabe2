//! The per-cycle drive loop: snapshot, rebuild, solve, look up.

use crate::error::AgentError;
use gridplan_core::{Action, DriftConfig, Environment, RewardConfig, SolverConfig};
use gridplan_grid::GridIndex;
use gridplan_solver::{PolicyIterationSolver, RewardField, SolveStats, TransitionModel};

/// Aggregate configuration for a [`DecisionAdapter`].
///
/// Bundles the reward constants, drift probabilities, and solver budgets
/// so callers configure one value and every shaping variant runs through
/// the same solver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlannerConfig {
    /// Reward constants for field rebuilds.
    pub rewards: RewardConfig,
    /// Drift probabilities for the transition model.
    pub drift: DriftConfig,
    /// Discount, sweep budget, and round ceiling.
    pub solver: SolverConfig,
}

/// The action chosen for one decision cycle, with the solver's report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision {
    /// The action to execute.
    pub action: Action,
    /// Convergence report from the underlying solve.
    pub stats: SolveStats,
}

/// External-facing decision maker.
///
/// Construction consumes the environment's `corners()` and `walls()`
/// once to build the immutable grid index. Each [`decide`] call owns a
/// fresh reward field, value table, and policy, all discarded when the
/// call returns — no solver state survives between cycles.
///
/// [`decide`]: DecisionAdapter::decide
#[derive(Clone, Debug)]
pub struct DecisionAdapter {
    grid: GridIndex,
    solver: PolicyIterationSolver,
    rewards: RewardConfig,
}

impl DecisionAdapter {
    /// Build the adapter from the environment's static geometry.
    pub fn new(env: &impl Environment, config: PlannerConfig) -> Result<Self, AgentError> {
        let grid = GridIndex::from_layout(&env.corners(), &env.walls())?;
        let solver = PolicyIterationSolver::new(config.solver, TransitionModel::new(config.drift))?;
        Ok(Self {
            grid,
            solver,
            rewards: config.rewards,
        })
    }

    /// The immutable grid index in use.
    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    /// Run one decision cycle and return the chosen action.
    pub fn decide(&self, env: &impl Environment) -> Result<Action, AgentError> {
        self.decide_with_stats(env).map(|d| d.action)
    }

    /// Run one decision cycle and return the action together with the
    /// solver's convergence report.
    pub fn decide_with_stats(&self, env: &impl Environment) -> Result<Decision, AgentError> {
        let field = RewardField::build(
            &self.grid,
            &env.consumables(),
            &env.bonuses(),
            &env.hazards(),
            &self.rewards,
        )?;
        let (policy, stats) = self.solver.solve(&self.grid, &field);

        let position = env.position();
        let chosen = policy
            .action(position)
            .ok_or(AgentError::PositionNotOpen { cell: position })?;

        let action = resolve_legal(chosen, &env.legal_actions())?;
        Ok(Decision { action, stats })
    }
}

/// Keep the policy's choice when the host accepts it; otherwise fall
/// back to the first legal action in fixed order so the result stays
/// deterministic under transient environment inconsistency.
fn resolve_legal(chosen: Action, legal: &[Action]) -> Result<Action, AgentError> {
    if legal.contains(&chosen) {
        return Ok(chosen);
    }
    Action::ALL
        .into_iter()
        .find(|a| legal.contains(a))
        .ok_or(AgentError::NoLegalActions)
}
