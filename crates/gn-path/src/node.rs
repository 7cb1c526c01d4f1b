//! Per-search node bookkeeping.

use gn_core::CellCoord;

/// Index of a [`SearchNode`] in the per-search arena.
pub(crate) type NodeIdx = usize;

/// One cell reached during a single search.
///
/// Nodes live in an arena (`Vec<SearchNode>`) owned by the search; `parent`
/// links form a tree rooted at the start node.  The arena is dropped when the
/// search returns.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub cell:   CellCoord,
    /// Steps from the start.
    pub g:      u32,
    /// Manhattan estimate to the goal.
    pub h:      u32,
    pub parent: Option<NodeIdx>,
    /// Insertion sequence into the open set; kept across decrease-key.
    pub seq:    u64,
}

impl SearchNode {
    #[inline]
    pub fn f(&self) -> u32 {
        self.g.saturating_add(self.h)
    }

    /// Open-set ordering: lowest `f`, then earliest insertion.
    #[inline]
    pub fn order_key(&self) -> (u32, u64) {
        (self.f(), self.seq)
    }
}
