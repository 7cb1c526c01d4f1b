//! Grid cells and their occupancy tag.

use std::hash::{Hash, Hasher};

use crate::CellCoord;

/// What occupies a cell, as far as navigation is concerned.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Nothing of interest (default).
    #[default]
    Empty,
    /// A live threat: highest-priority objective.
    Threat,
    /// A collectible: visited once every threat is gone.
    Collectible,
    /// The level exit: the terminal objective.
    Exit,
}

impl CellKind {
    /// Human-readable label, used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            CellKind::Empty       => "empty",
            CellKind::Threat      => "threat",
            CellKind::Collectible => "collectible",
            CellKind::Exit        => "exit",
        }
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One grid position as reported by a grid service.
///
/// Equality and hashing consider only `coord`; `walkable` and `kind` are a
/// snapshot of the cell's state at lookup time.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub coord:    CellCoord,
    pub walkable: bool,
    pub kind:     CellKind,
}

impl Cell {
    #[inline]
    pub fn new(coord: CellCoord, walkable: bool, kind: CellKind) -> Self {
        Self { coord, walkable, kind }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}
