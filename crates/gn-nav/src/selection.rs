//! Nearest-objective query.
//!
//! Candidates are bulk-loaded into an R-tree (via `rstar`) and walked in
//! ascending Euclidean distance.  Several candidates can share the minimum
//! distance; the one with the smallest `(y, x)` wins so that selection does
//! not depend on hash-set iteration order.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashSet;

use gn_core::CellCoord;

/// R-tree entry: a cell as an integer point.
#[derive(Clone)]
struct CellEntry {
    point: [i64; 2],
    cell:  CellCoord,
}

impl RTreeObject for CellEntry {
    type Envelope = AABB<[i64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CellEntry {
    fn distance_2(&self, point: &[i64; 2]) -> i64 {
        self.cell.distance_sq(cell_of(*point))
    }
}

#[inline]
fn point_of(cell: CellCoord) -> [i64; 2] {
    [cell.x as i64, cell.y as i64]
}

/// Inverse of [`point_of`].  Only ever applied to points built from cells.
#[inline]
fn cell_of(point: [i64; 2]) -> CellCoord {
    CellCoord::new(point[0] as i32, point[1] as i32)
}

/// The candidate closest to `from` by Euclidean distance, or `None` if
/// `candidates` is empty.
pub fn nearest(from: CellCoord, candidates: &FxHashSet<CellCoord>) -> Option<CellCoord> {
    let entries: Vec<CellEntry> = candidates
        .iter()
        .map(|&cell| CellEntry { point: point_of(cell), cell })
        .collect();
    let tree = RTree::bulk_load(entries);

    let query = point_of(from);
    let mut ranked = tree.nearest_neighbor_iter(&query);
    let first = ranked.next()?;
    let best = first.distance_2(&query);

    ranked
        .take_while(|e| e.distance_2(&query) == best)
        .map(|e| e.cell)
        .chain(std::iter::once(first.cell))
        .min_by_key(|c| (c.y, c.x))
}
