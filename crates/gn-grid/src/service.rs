//! The grid-service contract consumed by the pathfinder and the controller.
//!
//! Split in two layers so that pathfinding only needs geometry:
//!
//! - [`GridMap`]: bounds, walkability, cell lookup, and world↔grid
//!   conversion.  Enough to run a search.
//! - [`GridService`]: adds the authoritative, possibly-mutating objective
//!   membership (exit, live threats, live collectibles).

use rustc_hash::FxHashSet;

use gn_core::{Cell, CellCoord, WorldPos};

use crate::GridResult;

/// Read-only grid geometry.
pub trait GridMap {
    /// `(width, height)` in cells.
    fn extents(&self) -> (u32, u32);

    /// `true` if `coord` addresses a cell of this grid.
    #[inline]
    fn contains(&self, coord: CellCoord) -> bool {
        let (width, height) = self.extents();
        coord.x >= 0 && coord.y >= 0 && (coord.x as u32) < width && (coord.y as u32) < height
    }

    /// Walkability of `coord`.  Cells outside the grid are never walkable.
    fn is_walkable(&self, coord: CellCoord) -> bool;

    /// Bounds-checked cell lookup.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`](crate::GridError::OutOfBounds): never clamps.
    fn cell_at(&self, x: i32, y: i32) -> GridResult<Cell>;

    /// Cell containing the world position `pos`.
    fn world_to_cell(&self, pos: WorldPos) -> GridResult<CellCoord>;

    /// World position of the centre of `coord`.
    fn cell_to_world(&self, coord: CellCoord) -> WorldPos;
}

/// Grid geometry plus objective membership.
///
/// The sets returned by `live_threats` / `live_collectibles` are the current
/// truth; callers re-query them rather than caching.
pub trait GridService: GridMap {
    /// The fixed exit cell.  `None` is a level misconfiguration.
    fn exit_cell(&self) -> Option<CellCoord>;

    /// Threat cells that are currently active.
    fn live_threats(&self) -> FxHashSet<CellCoord>;

    /// Collectible cells not yet taken.
    fn live_collectibles(&self) -> FxHashSet<CellCoord>;
}
