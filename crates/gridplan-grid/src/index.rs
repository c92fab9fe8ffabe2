//! The immutable open/wall partition of the grid.

use crate::error::GridError;
use gridplan_core::Cell;
use indexmap::IndexSet;

/// Immutable traversability index over the grid bounding rectangle.
///
/// Built once at episode start by scanning the full rectangle derived
/// from the environment's corner coordinates and excluding every wall
/// cell. Open cells are stored in canonical order (x-major, y ascending
/// within a column), and every per-cycle map in the solver iterates in
/// that order, which makes sweep order and therefore solver output
/// deterministic across runs.
///
/// Coordinates outside the bounding rectangle report closed. Real
/// layouts carry a wall border so the solver never probes out of
/// bounds, but synthetic borderless grids get the same wall-absorption
/// behaviour at the rectangle edge.
#[derive(Clone, Debug)]
pub struct GridIndex {
    width: i32,
    height: i32,
    open: IndexSet<Cell>,
}

impl GridIndex {
    /// Build the index from the environment's corner and wall reports.
    ///
    /// The bounding rectangle spans `(0, 0)` to the maximum corner
    /// coordinates inclusive. Every coordinate in the rectangle that is
    /// not a wall is open.
    pub fn from_layout(corners: &[Cell], walls: &[Cell]) -> Result<Self, GridError> {
        if corners.is_empty() {
            return Err(GridError::NoCorners);
        }
        let width = corners.iter().map(|c| c.x).max().unwrap_or(-1) + 1;
        let height = corners.iter().map(|c| c.y).max().unwrap_or(-1) + 1;
        if width <= 0 || height <= 0 {
            return Err(GridError::EmptyGrid { width, height });
        }

        let wall_set: IndexSet<Cell> = walls.iter().copied().collect();
        for &wall in &wall_set {
            if wall.x < 0 || wall.x >= width || wall.y < 0 || wall.y >= height {
                return Err(GridError::WallOutOfBounds { cell: wall });
            }
        }

        let mut open = IndexSet::with_capacity((width * height) as usize - wall_set.len());
        for x in 0..width {
            for y in 0..height {
                let cell = Cell::new(x, y);
                if !wall_set.contains(&cell) {
                    open.insert(cell);
                }
            }
        }
        Ok(Self {
            width,
            height,
            open,
        })
    }

    /// Width of the bounding rectangle.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the bounding rectangle.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `cell` is traversable. Walls and out-of-bounds
    /// coordinates are closed.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.open.contains(&cell)
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Open cells in canonical order (x-major, y ascending).
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.open.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn corners(w: i32, h: i32) -> Vec<Cell> {
        vec![
            Cell::new(0, 0),
            Cell::new(w - 1, 0),
            Cell::new(0, h - 1),
            Cell::new(w - 1, h - 1),
        ]
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn bounds_derived_from_extreme_corners() {
        let g = GridIndex::from_layout(&corners(7, 4), &[]).unwrap();
        assert_eq!(g.width(), 7);
        assert_eq!(g.height(), 4);
        assert_eq!(g.open_count(), 28);
    }

    #[test]
    fn no_corners_is_an_error() {
        let err = GridIndex::from_layout(&[], &[]).unwrap_err();
        assert_eq!(err, GridError::NoCorners);
    }

    #[test]
    fn wall_outside_rectangle_is_an_error() {
        let err = GridIndex::from_layout(&corners(3, 3), &[Cell::new(5, 1)]).unwrap_err();
        assert_eq!(
            err,
            GridError::WallOutOfBounds {
                cell: Cell::new(5, 1)
            }
        );
    }

    // ── Queries ─────────────────────────────────────────────────

    #[test]
    fn walls_are_closed_everything_else_open() {
        let wall = Cell::new(1, 1);
        let g = GridIndex::from_layout(&corners(3, 3), &[wall]).unwrap();
        assert!(!g.is_open(wall));
        assert!(g.is_open(Cell::new(0, 0)));
        assert!(g.is_open(Cell::new(2, 2)));
        assert_eq!(g.open_count(), 8);
    }

    #[test]
    fn out_of_bounds_is_closed() {
        let g = GridIndex::from_layout(&corners(3, 3), &[]).unwrap();
        assert!(!g.is_open(Cell::new(-1, 0)));
        assert!(!g.is_open(Cell::new(0, 3)));
        assert!(!g.is_open(Cell::new(3, 0)));
    }

    #[test]
    fn open_cells_iterate_x_major() {
        let g = GridIndex::from_layout(&corners(2, 2), &[]).unwrap();
        let order: Vec<Cell> = g.open_cells().collect();
        assert_eq!(
            order,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1),
            ]
        );
    }

    #[test]
    fn duplicate_walls_counted_once() {
        let wall = Cell::new(0, 0);
        let g = GridIndex::from_layout(&corners(2, 2), &[wall, wall]).unwrap();
        assert_eq!(g.open_count(), 3);
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn partition_is_exhaustive_and_exclusive(
            w in 1i32..12,
            h in 1i32..12,
            wall_seed in proptest::collection::vec((0i32..12, 0i32..12), 0..20),
        ) {
            let walls: Vec<Cell> = wall_seed
                .into_iter()
                .map(|(x, y)| Cell::new(x % w, y % h))
                .collect();
            let g = GridIndex::from_layout(&corners(w, h), &walls).unwrap();
            for x in 0..w {
                for y in 0..h {
                    let cell = Cell::new(x, y);
                    prop_assert_eq!(g.is_open(cell), !walls.contains(&cell));
                }
            }
            prop_assert_eq!(g.open_count(), g.open_cells().count());
        }

        #[test]
        fn canonical_order_is_stable(
            w in 1i32..10,
            h in 1i32..10,
        ) {
            let a = GridIndex::from_layout(&corners(w, h), &[]).unwrap();
            let b = GridIndex::from_layout(&corners(w, h), &[]).unwrap();
            let oa: Vec<Cell> = a.open_cells().collect();
            let ob: Vec<Cell> = b.open_cells().collect();
            prop_assert_eq!(oa, ob);
        }
    }
}
