//! The abstraction seam between the solver and its host environment.

use crate::action::Action;
use crate::cell::Cell;

/// Read access to the host environment's world state.
///
/// The decision adapter queries `corners()` and `walls()` once at setup
/// to size the grid index, and re-queries the dynamic methods on every
/// decision cycle because consumables are eaten and hazards move between
/// cycles. Implementations are expected to answer from a consistent
/// snapshot within one cycle; the adapter never writes back.
pub trait Environment {
    /// The four extreme corner coordinates of the grid bounding rectangle.
    fn corners(&self) -> Vec<Cell>;

    /// Static obstacle positions. Consumed once at setup.
    fn walls(&self) -> Vec<Cell>;

    /// Positions of regular consumables, re-queried every cycle.
    fn consumables(&self) -> Vec<Cell>;

    /// Positions of rare high-value consumables, re-queried every cycle.
    fn bonuses(&self) -> Vec<Cell>;

    /// Positions of hazards, re-queried every cycle.
    fn hazards(&self) -> Vec<Cell>;

    /// The agent's current cell.
    fn position(&self) -> Cell;

    /// The actions the host will currently accept.
    ///
    /// Normally all four, since the policy is computed over the same
    /// grid; the adapter falls back deterministically if the host
    /// disagrees at that instant.
    fn legal_actions(&self) -> Vec<Action>;
}
