//! Grid-space and world-space coordinates.
//!
//! `CellCoord` is signed on purpose: stepping off the edge of the grid yields
//! a negative (and therefore out-of-bounds) coordinate instead of wrapping, so
//! bounds checks stay in one place (the grid service).

use std::fmt;

// ── CellCoord ─────────────────────────────────────────────────────────────────

/// Integer address of one grid cell.  Equality is purely by coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell `(dx, dy)` away from `self`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// The four orthogonal neighbours in expansion order: up (y − 1),
    /// down (y + 1), left (x − 1), right (x + 1).
    ///
    /// The order is part of the search's determinism contract: changing it
    /// changes which of several equal-cost paths A* returns.
    #[inline]
    pub fn neighbors4(self) -> [CellCoord; 4] {
        [
            self.offset(0, -1),
            self.offset(0, 1),
            self.offset(-1, 0),
            self.offset(1, 0),
        ]
    }

    /// Manhattan (L1) distance: the A* heuristic on a 4-connected grid.
    #[inline]
    pub fn manhattan(self, other: CellCoord) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// Squared Euclidean distance, widened to `i64` so grids far larger than
    /// anything addressable in memory cannot overflow it.
    #[inline]
    pub fn distance_sq(self, other: CellCoord) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for CellCoord {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

// ── WorldPos ──────────────────────────────────────────────────────────────────

/// A continuous world-space position.
///
/// Single precision is plenty: levels are at most a few thousand cells across.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `true` when both components are finite (no NaN / infinity).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
