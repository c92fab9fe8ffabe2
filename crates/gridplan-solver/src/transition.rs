//! Stochastic movement model with lateral drift.

use gridplan_core::{Action, Cell, DriftConfig};
use gridplan_grid::GridIndex;
use smallvec::SmallVec;

/// Probability-weighted outcomes of attempting a move.
///
/// An intended move lands in the target neighbour with the configured
/// forward probability and slips into each perpendicular neighbour with
/// the lateral probability; the reverse direction carries zero mass.
/// Any target that is a wall or out of bounds redirects its probability
/// mass back to the origin cell — walls absorb the attempt, they do not
/// fail it.
#[derive(Clone, Copy, Debug)]
pub struct TransitionModel {
    drift: DriftConfig,
}

impl TransitionModel {
    /// Create a model with the given drift probabilities.
    ///
    /// The probabilities are assumed validated; construction sites go
    /// through [`DriftConfig::validate`] before reaching the solver.
    pub fn new(drift: DriftConfig) -> Self {
        Self { drift }
    }

    /// The drift probabilities in use.
    pub fn drift(&self) -> DriftConfig {
        self.drift
    }

    /// The probability-weighted resulting cells of taking `action` at
    /// `cell`. Probabilities sum to 1; entries may repeat a cell when
    /// several targets resolve to the origin.
    pub fn outcomes(
        &self,
        grid: &GridIndex,
        cell: Cell,
        action: Action,
    ) -> SmallVec<[(Cell, f64); 3]> {
        let [lat_a, lat_b] = action.lateral();
        let mut outcomes = SmallVec::new();
        for (target_action, probability) in [
            (action, self.drift.forward),
            (lat_a, self.drift.lateral),
            (lat_b, self.drift.lateral),
        ] {
            let target = cell.step(target_action);
            let resolved = if grid.is_open(target) { target } else { cell };
            outcomes.push((resolved, probability));
        }
        outcomes
    }
}

impl Default for TransitionModel {
    fn default() -> Self {
        Self::new(DriftConfig::default())
    }
}
