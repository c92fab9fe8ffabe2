//! Test utilities and mock types for gridplan development.
//!
//! Provides [`MockEnvironment`], an in-memory [`Environment`]
//! implementation with setters for every query, and grid fixtures
//! ([`corridor`], [`open_grid`], [`walled_room`]) used across the
//! workspace's unit and scenario tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridplan_core::{Action, Cell, Environment};
use gridplan_grid::GridIndex;

/// Mock implementation of [`Environment`].
///
/// Holds every query answer as plain data. Tests set up a layout with
/// [`MockEnvironment::new`], then mutate the dynamic state between
/// decision cycles with the `set_*` methods to simulate consumed food
/// and moving hazards.
#[derive(Clone, Debug)]
pub struct MockEnvironment {
    corners: Vec<Cell>,
    walls: Vec<Cell>,
    consumables: Vec<Cell>,
    bonuses: Vec<Cell>,
    hazards: Vec<Cell>,
    position: Cell,
    legal: Vec<Action>,
}

impl MockEnvironment {
    /// A `width x height` layout with no walls, the agent at `position`,
    /// and all four actions legal.
    pub fn new(width: i32, height: i32, position: Cell) -> Self {
        Self {
            corners: vec![
                Cell::new(0, 0),
                Cell::new(width - 1, 0),
                Cell::new(0, height - 1),
                Cell::new(width - 1, height - 1),
            ],
            walls: Vec::new(),
            consumables: Vec::new(),
            bonuses: Vec::new(),
            hazards: Vec::new(),
            position,
            legal: Action::ALL.to_vec(),
        }
    }

    pub fn set_walls(&mut self, walls: Vec<Cell>) {
        self.walls = walls;
    }

    pub fn set_consumables(&mut self, consumables: Vec<Cell>) {
        self.consumables = consumables;
    }

    pub fn set_bonuses(&mut self, bonuses: Vec<Cell>) {
        self.bonuses = bonuses;
    }

    pub fn set_hazards(&mut self, hazards: Vec<Cell>) {
        self.hazards = hazards;
    }

    pub fn set_position(&mut self, position: Cell) {
        self.position = position;
    }

    pub fn set_legal_actions(&mut self, legal: Vec<Action>) {
        self.legal = legal;
    }
}

impl Environment for MockEnvironment {
    fn corners(&self) -> Vec<Cell> {
        self.corners.clone()
    }

    fn walls(&self) -> Vec<Cell> {
        self.walls.clone()
    }

    fn consumables(&self) -> Vec<Cell> {
        self.consumables.clone()
    }

    fn bonuses(&self) -> Vec<Cell> {
        self.bonuses.clone()
    }

    fn hazards(&self) -> Vec<Cell> {
        self.hazards.clone()
    }

    fn position(&self) -> Cell {
        self.position
    }

    fn legal_actions(&self) -> Vec<Action> {
        self.legal.clone()
    }
}

/// A 1-row corridor of `len` open cells, `(0, 0)` through `(len-1, 0)`.
pub fn corridor(len: i32) -> GridIndex {
    let corners = [Cell::new(0, 0), Cell::new(len - 1, 0)];
    GridIndex::from_layout(&corners, &[]).expect("corridor layout is valid")
}

/// A fully open `width x height` grid with no walls.
pub fn open_grid(width: i32, height: i32) -> GridIndex {
    let corners = [Cell::new(0, 0), Cell::new(width - 1, height - 1)];
    GridIndex::from_layout(&corners, &[]).expect("open grid layout is valid")
}

/// A `width x height` grid whose border cells are all walls, leaving an
/// open interior — the shape real game layouts have.
pub fn walled_room(width: i32, height: i32) -> GridIndex {
    let corners = [Cell::new(0, 0), Cell::new(width - 1, height - 1)];
    let mut walls = Vec::new();
    for x in 0..width {
        for y in 0..height {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                walls.push(Cell::new(x, y));
            }
        }
    }
    GridIndex::from_layout(&corners, &walls).expect("walled room layout is valid")
}
