//! A playable level: grid geometry plus the objective registry.
//!
//! `Level` is the reference [`GridService`]: it owns the authoritative
//! liveness of every threat and collectible.  Drivers mutate it through
//! [`deactivate_threat`](Level::deactivate_threat) and
//! [`take_collectible`](Level::take_collectible); the navigation controller
//! only ever reads it.

use rustc_hash::FxHashSet;

use gn_core::{Cell, CellCoord, CellKind, WorldPos};

use crate::{Grid, GridError, GridMap, GridResult, GridService};

/// A threat cell and its external liveness flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Threat {
    pub cell:   CellCoord,
    pub active: bool,
}

/// Grid plus exit, threats, and collectibles.
#[derive(Clone, Debug)]
pub struct Level {
    grid:         Grid,
    exit:         Option<CellCoord>,
    threats:      Vec<Threat>,
    collectibles: FxHashSet<CellCoord>,
}

impl Level {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for walkability changes between searches.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Every threat ever placed, active or not, in placement order.
    pub fn threats(&self) -> &[Threat] {
        &self.threats
    }

    /// Number of active threats plus untaken collectibles.
    pub fn remaining_objectives(&self) -> usize {
        self.threats.iter().filter(|t| t.active).count() + self.collectibles.len()
    }

    /// Deactivate the threat at `cell`.
    ///
    /// Returns `true` only if an active threat was there; deactivating twice
    /// is a no-op.
    pub fn deactivate_threat(&mut self, cell: CellCoord) -> bool {
        match self.threats.iter_mut().find(|t| t.cell == cell && t.active) {
            Some(threat) => {
                threat.active = false;
                true
            }
            None => false,
        }
    }

    /// Remove the collectible at `cell`.  Returns `true` if one was there.
    pub fn take_collectible(&mut self, cell: CellCoord) -> bool {
        self.collectibles.remove(&cell)
    }

    fn kind_of(&self, coord: CellCoord) -> CellKind {
        if self.exit == Some(coord) {
            CellKind::Exit
        } else if self.threats.iter().any(|t| t.active && t.cell == coord) {
            CellKind::Threat
        } else if self.collectibles.contains(&coord) {
            CellKind::Collectible
        } else {
            CellKind::Empty
        }
    }
}

impl GridMap for Level {
    #[inline]
    fn extents(&self) -> (u32, u32) {
        self.grid.extents()
    }

    #[inline]
    fn is_walkable(&self, coord: CellCoord) -> bool {
        self.grid.is_walkable(coord)
    }

    fn cell_at(&self, x: i32, y: i32) -> GridResult<Cell> {
        let mut cell = self.grid.cell_at(x, y)?;
        cell.kind = self.kind_of(cell.coord);
        Ok(cell)
    }

    fn world_to_cell(&self, pos: WorldPos) -> GridResult<CellCoord> {
        self.grid.world_to_cell(pos)
    }

    fn cell_to_world(&self, coord: CellCoord) -> WorldPos {
        self.grid.cell_to_world(coord)
    }
}

impl GridService for Level {
    fn exit_cell(&self) -> Option<CellCoord> {
        self.exit
    }

    fn live_threats(&self) -> FxHashSet<CellCoord> {
        self.threats.iter().filter(|t| t.active).map(|t| t.cell).collect()
    }

    fn live_collectibles(&self) -> FxHashSet<CellCoord> {
        self.collectibles.clone()
    }
}

// ── LevelBuilder ──────────────────────────────────────────────────────────────

/// Place objectives on a [`Grid`], then call [`build`](Self::build).
pub struct LevelBuilder {
    grid:         Grid,
    exit:         Option<CellCoord>,
    threats:      Vec<CellCoord>,
    collectibles: Vec<CellCoord>,
}

impl LevelBuilder {
    pub fn new(grid: Grid) -> Self {
        Self { grid, exit: None, threats: Vec::new(), collectibles: Vec::new() }
    }

    pub fn exit(&mut self, cell: CellCoord) -> &mut Self {
        self.exit = Some(cell);
        self
    }

    pub fn threat(&mut self, cell: CellCoord) -> &mut Self {
        self.threats.push(cell);
        self
    }

    pub fn collectible(&mut self, cell: CellCoord) -> &mut Self {
        self.collectibles.push(cell);
        self
    }

    /// Validate placements and produce the [`Level`].
    ///
    /// A level without an exit builds successfully; the controller rejects it
    /// at initialization.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` / `Blocked` if an objective is off-grid or on a wall.
    /// - `Overlap` if two objectives (including the exit) share a cell.
    pub fn build(self) -> GridResult<Level> {
        let mut occupied = FxHashSet::default();
        let placements = self
            .exit
            .iter()
            .chain(&self.threats)
            .chain(&self.collectibles);
        for &cell in placements {
            if !self.grid.contains(cell) {
                return Err(GridError::OutOfBounds(cell));
            }
            if !self.grid.is_walkable(cell) {
                return Err(GridError::Blocked(cell));
            }
            if !occupied.insert(cell) {
                return Err(GridError::Overlap(cell));
            }
        }

        Ok(Level {
            grid:         self.grid,
            exit:         self.exit,
            threats:      self
                .threats
                .into_iter()
                .map(|cell| Threat { cell, active: true })
                .collect(),
            collectibles: self.collectibles.into_iter().collect(),
        })
    }
}
