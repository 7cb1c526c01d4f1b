//! The result of a successful search.

use gn_core::CellCoord;

/// An ordered, non-empty cell sequence from start to goal, **both inclusive**.
///
/// `cells()[0]` is the cell the search started from (which need not be
/// walkable); every later cell is walkable and orthogonally adjacent to its
/// predecessor.  [`steps`](Self::steps) is the number of moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<CellCoord>,
}

impl Path {
    /// The zero-step path of an agent already standing on its goal.
    pub fn trivial(cell: CellCoord) -> Self {
        Self { cells: vec![cell] }
    }

    /// Wrap a reconstructed cell sequence.  `cells` must be non-empty.
    pub(crate) fn from_cells(cells: Vec<CellCoord>) -> Self {
        debug_assert!(!cells.is_empty(), "a path has at least its start cell");
        Self { cells }
    }

    pub fn cells(&self) -> &[CellCoord] {
        &self.cells
    }

    pub fn start(&self) -> CellCoord {
        self.cells[0]
    }

    pub fn goal(&self) -> CellCoord {
        self.cells[self.cells.len() - 1]
    }

    /// Number of moves (`cells().len() - 1`).
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    /// `true` if start and goal coincide.
    pub fn is_trivial(&self) -> bool {
        self.cells.len() == 1
    }

    /// The cells after the start, i.e. the moves to make in order.
    pub fn moves(&self) -> &[CellCoord] {
        &self.cells[1..]
    }

    /// `true` if every consecutive pair is orthogonally adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].manhattan(w[1]) == 1)
    }
}
