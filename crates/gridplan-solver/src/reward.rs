//! Per-cycle reward assignment over the open-cell set.

use crate::error::ModelError;
use gridplan_core::{Cell, RewardConfig};
use gridplan_grid::GridIndex;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Scalar reward for every open cell, rebuilt each decision cycle.
///
/// Assignment runs in two passes. The base pass gives every open cell
/// its background, consumable, or bonus value (bonus wins on a
/// coincident cell). The hazard pass then overwrites hazard-occupied
/// cells and their open orthogonal neighbours, so danger is never
/// masked by food reward on the same or an adjacent cell.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardField {
    values: IndexMap<Cell, f64>,
}

impl RewardField {
    /// Build the field from the current consumable/bonus/hazard positions.
    ///
    /// Every reported position must be an open cell; anything else means
    /// the grid model is desynchronized from the environment and returns
    /// [`ModelError::UnknownCell`].
    pub fn build(
        grid: &GridIndex,
        consumables: &[Cell],
        bonuses: &[Cell],
        hazards: &[Cell],
        config: &RewardConfig,
    ) -> Result<Self, ModelError> {
        let consumable_set = open_set(grid, consumables, "consumable")?;
        let bonus_set = open_set(grid, bonuses, "bonus")?;
        let hazard_set = open_set(grid, hazards, "hazard")?;

        let mut values = IndexMap::with_capacity(grid.open_count());
        for cell in grid.open_cells() {
            let reward = if bonus_set.contains(&cell) {
                config.bonus
            } else if consumable_set.contains(&cell) {
                config.consumable
            } else {
                config.background
            };
            values.insert(cell, reward);
        }

        // Hazard pass runs last so it dominates the base pass. Adjacency
        // never overwrites a hazard-occupied cell, which keeps the result
        // independent of hazard order when two hazards sit side by side.
        for &hazard in &hazard_set {
            values[&hazard] = config.hazard;
        }
        for &hazard in &hazard_set {
            for neighbour in hazard.neighbours() {
                if grid.is_open(neighbour) && !hazard_set.contains(&neighbour) {
                    values[&neighbour] = config.hazard_adjacent;
                }
            }
        }

        Ok(Self { values })
    }

    /// The reward at `cell`, or `None` for walls and out-of-bounds cells.
    pub fn get(&self, cell: Cell) -> Option<f64> {
        self.values.get(&cell).copied()
    }

    /// Iterate `(cell, reward)` pairs in canonical cell order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.values.iter().map(|(&c, &r)| (c, r))
    }

    /// Number of open cells covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the field covers no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn open_set(
    grid: &GridIndex,
    cells: &[Cell],
    role: &'static str,
) -> Result<HashSet<Cell>, ModelError> {
    let mut set = HashSet::with_capacity(cells.len());
    for &cell in cells {
        if !grid.is_open(cell) {
            return Err(ModelError::UnknownCell { cell, role });
        }
        set.insert(cell);
    }
    Ok(set)
}
