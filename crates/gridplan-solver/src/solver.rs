//! Policy iteration: bounded evaluation/improvement to a stable policy.

use crate::reward::RewardField;
use crate::transition::TransitionModel;
use gridplan_core::{Action, Cell, ConfigError, SolverConfig, ValueUpdate};
use gridplan_grid::GridIndex;
use indexmap::IndexMap;

/// Utility estimate per open cell, zeroed at the start of every cycle.
pub type ValueTable = IndexMap<Cell, f64>;

/// Mapping from open cell to the action considered best from that cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Policy {
    actions: IndexMap<Cell, Action>,
}

impl Policy {
    /// Every open cell starts on the same fixed default action.
    pub(crate) fn uniform(grid: &GridIndex, default: Action) -> Self {
        Self {
            actions: grid.open_cells().map(|c| (c, default)).collect(),
        }
    }

    /// The chosen action at `cell`, or `None` for walls and
    /// out-of-bounds cells.
    pub fn action(&self, cell: Cell) -> Option<Action> {
        self.actions.get(&cell).copied()
    }

    /// Iterate `(cell, action)` pairs in canonical cell order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Action)> + '_ {
        self.actions.iter().map(|(&c, &a)| (c, a))
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the policy covers no cells.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    fn get_mut(&mut self, cell: Cell) -> &mut Action {
        &mut self.actions[&cell]
    }
}

/// Outcome report for one solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveStats {
    /// Whether an improvement pass left every action unchanged.
    pub converged: bool,
    /// Number of evaluation/improvement rounds executed.
    pub rounds: usize,
}

/// Alternates policy evaluation and greedy improvement until the policy
/// stabilises or the round ceiling is hit.
///
/// Evaluation runs a fixed sweep budget per round; it is not a
/// convergence-tolerance stop. Improvement re-selects the
/// highest-expected-value action per cell, breaking ties toward the
/// earlier entry of [`Action::ALL`], so the output is reproducible
/// bit-for-bit given identical inputs. If the ceiling is exceeded, the
/// policy whose evaluation scored the highest aggregate value is
/// returned instead of looping indefinitely.
#[derive(Clone, Debug)]
pub struct PolicyIterationSolver {
    config: SolverConfig,
    transitions: TransitionModel,
}

impl PolicyIterationSolver {
    /// Default action assigned to every cell before the first
    /// improvement pass.
    pub const DEFAULT_ACTION: Action = Action::North;

    /// Create a solver, rejecting invalid configuration up front.
    pub fn new(config: SolverConfig, transitions: TransitionModel) -> Result<Self, ConfigError> {
        config.validate()?;
        transitions.drift().validate()?;
        Ok(Self {
            config,
            transitions,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The transition model in use.
    pub fn transitions(&self) -> &TransitionModel {
        &self.transitions
    }

    /// Compute a policy for the given reward field.
    ///
    /// Values and policy are created fresh here and owned by this call;
    /// nothing carries over from previous cycles.
    pub fn solve(&self, grid: &GridIndex, rewards: &RewardField) -> (Policy, SolveStats) {
        let mut values: ValueTable = grid.open_cells().map(|c| (c, 0.0)).collect();
        let mut policy = Policy::uniform(grid, Self::DEFAULT_ACTION);

        let mut best_policy = policy.clone();
        let mut best_aggregate = f64::NEG_INFINITY;
        let mut rounds = 0;

        while rounds < self.config.max_improvement_rounds {
            rounds += 1;
            self.evaluate(grid, rewards, &policy, &mut values);

            // Rank the just-evaluated policy for the non-convergence
            // fallback before improvement replaces it.
            let aggregate: f64 = values.values().sum();
            if aggregate > best_aggregate {
                best_aggregate = aggregate;
                best_policy = policy.clone();
            }

            if !self.improve(grid, &values, &mut policy) {
                let stats = SolveStats {
                    converged: true,
                    rounds,
                };
                return (policy, stats);
            }
        }

        let stats = SolveStats {
            converged: false,
            rounds,
        };
        (best_policy, stats)
    }

    /// Probability-weighted one-step lookahead under the current values.
    fn expected_value(
        &self,
        grid: &GridIndex,
        values: &ValueTable,
        cell: Cell,
        action: Action,
    ) -> f64 {
        self.transitions
            .outcomes(grid, cell, action)
            .iter()
            .map(|&(target, p)| p * values[&target])
            .sum()
    }

    /// Fixed-budget sweeps of the Bellman update for the current
    /// policy, in-place or against a frozen copy per [`ValueUpdate`].
    fn evaluate(
        &self,
        grid: &GridIndex,
        rewards: &RewardField,
        policy: &Policy,
        values: &mut ValueTable,
    ) {
        let cells: Vec<Cell> = values.keys().copied().collect();
        for _ in 0..self.config.eval_sweeps {
            match self.config.update {
                ValueUpdate::InPlace => {
                    for &cell in &cells {
                        let action = policy.action(cell).unwrap_or(Self::DEFAULT_ACTION);
                        let reward = rewards.get(cell).unwrap_or(0.0);
                        let updated = reward
                            + self.config.discount
                                * self.expected_value(grid, values, cell, action);
                        values[&cell] = updated;
                    }
                }
                ValueUpdate::Synchronous => {
                    let frozen = values.clone();
                    for (&cell, slot) in values.iter_mut() {
                        let action = policy.action(cell).unwrap_or(Self::DEFAULT_ACTION);
                        let reward = rewards.get(cell).unwrap_or(0.0);
                        *slot = reward
                            + self.config.discount
                                * self.expected_value(grid, &frozen, cell, action);
                    }
                }
            }
        }
    }

    /// Greedy re-selection per cell. Returns `true` if any action changed.
    fn improve(&self, grid: &GridIndex, values: &ValueTable, policy: &mut Policy) -> bool {
        let mut changed = false;
        let cells: Vec<Cell> = values.keys().copied().collect();
        for cell in cells {
            let mut best_action = Action::ALL[0];
            let mut best_value = self.expected_value(grid, values, cell, best_action);
            for &action in &Action::ALL[1..] {
                let value = self.expected_value(grid, values, cell, action);
                // Strict improvement only: ties resolve to the earlier
                // action in the fixed order.
                if value > best_value {
                    best_value = value;
                    best_action = action;
                }
            }
            let slot = policy.get_mut(cell);
            if *slot != best_action {
                *slot = best_action;
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridplan_core::RewardConfig;
    use gridplan_test_utils::{corridor, open_grid};

    fn solver(config: SolverConfig) -> PolicyIterationSolver {
        PolicyIterationSolver::new(config, TransitionModel::default()).unwrap()
    }

    fn default_solver() -> PolicyIterationSolver {
        solver(SolverConfig::default())
    }

    fn rewards(grid: &GridIndex, consumables: &[Cell], hazards: &[Cell]) -> RewardField {
        RewardField::build(grid, consumables, &[], hazards, &RewardConfig::default()).unwrap()
    }

    // ── Contract ────────────────────────────────────────────────

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = SolverConfig {
            discount: 1.5,
            ..Default::default()
        };
        assert!(PolicyIterationSolver::new(config, TransitionModel::default()).is_err());
    }

    #[test]
    fn policy_covers_exactly_the_open_cells() {
        let grid = open_grid(4, 3);
        let field = rewards(&grid, &[Cell::new(3, 2)], &[]);
        let (policy, _) = default_solver().solve(&grid, &field);
        assert_eq!(policy.len(), grid.open_count());
        assert!(policy.action(Cell::new(9, 9)).is_none());
    }

    // ── Policy sanity ───────────────────────────────────────────

    #[test]
    fn corridor_policy_points_at_the_consumable() {
        let grid = corridor(5);
        let field = rewards(&grid, &[Cell::new(4, 0)], &[]);
        let (policy, stats) = default_solver().solve(&grid, &field);
        assert!(stats.converged);
        for x in 0..5 {
            assert_eq!(
                policy.action(Cell::new(x, 0)),
                Some(Action::East),
                "cell ({x}, 0)"
            );
        }
    }

    #[test]
    fn corridor_policy_reverses_with_the_consumable() {
        let grid = corridor(5);
        let field = rewards(&grid, &[Cell::new(0, 0)], &[]);
        let (policy, stats) = default_solver().solve(&grid, &field);
        assert!(stats.converged);
        for x in 0..5 {
            assert_eq!(policy.action(Cell::new(x, 0)), Some(Action::West));
        }
    }

    #[test]
    fn policy_avoids_hazard_neighbourhood() {
        let grid = open_grid(5, 5);
        let field = rewards(&grid, &[Cell::new(4, 4)], &[Cell::new(0, 0)]);
        let (policy, stats) = default_solver().solve(&grid, &field);
        assert!(stats.converged);
        // Next to the hazard the policy must not walk into it.
        assert_ne!(policy.action(Cell::new(1, 0)), Some(Action::West));
        assert_ne!(policy.action(Cell::new(0, 1)), Some(Action::South));
    }

    // ── Determinism ─────────────────────────────────────────────

    #[test]
    fn repeated_solves_are_bit_identical() {
        let grid = open_grid(6, 5);
        let field = rewards(
            &grid,
            &[Cell::new(5, 4), Cell::new(0, 4)],
            &[Cell::new(3, 2)],
        );
        let s = default_solver();
        let (first, _) = s.solve(&grid, &field);
        for _ in 0..5 {
            let (again, _) = s.solve(&grid, &field);
            let a: Vec<(Cell, Action)> = first.iter().collect();
            let b: Vec<(Cell, Action)> = again.iter().collect();
            assert_eq!(a, b);
        }
    }

    // ── Convergence bounds ──────────────────────────────────────

    #[test]
    fn small_grid_with_hazard_converges_within_ceiling() {
        let grid = open_grid(3, 3);
        let field = rewards(&grid, &[], &[Cell::new(1, 1)]);
        let (_, stats) = default_solver().solve(&grid, &field);
        assert!(stats.converged, "did not converge in {} rounds", stats.rounds);
        assert!(stats.rounds <= 50);
    }

    #[test]
    fn round_ceiling_is_respected() {
        let grid = open_grid(4, 4);
        let field = rewards(&grid, &[Cell::new(3, 3)], &[]);
        let config = SolverConfig {
            max_improvement_rounds: 1,
            ..Default::default()
        };
        let (policy, stats) = solver(config).solve(&grid, &field);
        assert_eq!(stats.rounds, 1);
        // Fallback still yields a full policy.
        assert_eq!(policy.len(), grid.open_count());
    }

    // ── Update-strategy equivalence ─────────────────────────────

    #[test]
    fn in_place_and_synchronous_agree_on_corridors() {
        for (len, food) in [(5, 4), (9, 0), (7, 3)] {
            let grid = corridor(len);
            let field = rewards(&grid, &[Cell::new(food, 0)], &[]);
            let in_place = default_solver().solve(&grid, &field).0;
            let jacobi = solver(SolverConfig {
                update: ValueUpdate::Synchronous,
                ..Default::default()
            })
            .solve(&grid, &field)
            .0;
            let a: Vec<(Cell, Action)> = in_place.iter().collect();
            let b: Vec<(Cell, Action)> = jacobi.iter().collect();
            assert_eq!(a, b, "corridor len {len}, food at {food}");
        }
    }
}
