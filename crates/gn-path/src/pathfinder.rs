//! Pathfinder trait and default A* implementation.
//!
//! # Pluggability
//!
//! The navigation controller calls search through the [`Pathfinder`] trait,
//! so a host can substitute a different algorithm (jump-point search, a
//! cached planner) without touching the controller.
//!
//! # Determinism
//!
//! [`AStarPathfinder`] breaks `f` ties by insertion order into the open set
//! and expands neighbours in the fixed order up, down, left, right.  Equal
//! inputs therefore always produce the identical path, not merely one of the
//! same length.

use tracing::{debug, trace};

use gn_core::CellCoord;
use gn_grid::GridMap;

use crate::node::{NodeIdx, SearchNode};
use crate::open_set::OpenSet;
use crate::{Path, PathError, PathResult};

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must not carry state between calls: a search is a pure
/// function of `(grid, start, goal)`.
pub trait Pathfinder: Send + Sync {
    /// Compute a minimum-step walkable path from `start` to `goal`.
    ///
    /// `start` need not be walkable (the agent is already there); every other
    /// cell of the result is.
    ///
    /// # Errors
    ///
    /// - [`PathError::InvalidCoordinate`] if `start` or `goal` is off-grid.
    /// - [`PathError::NotFound`] if `goal` is unwalkable or unreachable.
    fn find_path<G: GridMap + ?Sized>(
        &self,
        grid:  &G,
        start: CellCoord,
        goal:  CellCoord,
    ) -> PathResult<Path>;
}

// ── AStarPathfinder ───────────────────────────────────────────────────────────

/// A* with the Manhattan heuristic over the 4-connected grid.
///
/// All working sets (node arena, cell→node table, closed bitmap, open heap)
/// are allocated per call, so one instance can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarPathfinder;

impl Pathfinder for AStarPathfinder {
    fn find_path<G: GridMap + ?Sized>(
        &self,
        grid:  &G,
        start: CellCoord,
        goal:  CellCoord,
    ) -> PathResult<Path> {
        astar(grid, start, goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

const NO_NODE: NodeIdx = usize::MAX;

#[derive(Default)]
struct SearchStats {
    expanded:  usize,
    generated: usize,
    decreased: usize,
    peak_open: usize,
}

fn astar<G: GridMap + ?Sized>(grid: &G, start: CellCoord, goal: CellCoord) -> PathResult<Path> {
    if !grid.contains(start) {
        return Err(PathError::InvalidCoordinate(start));
    }
    if !grid.contains(goal) {
        return Err(PathError::InvalidCoordinate(goal));
    }
    if !grid.is_walkable(goal) {
        debug!(%start, %goal, "goal is not walkable");
        return Err(PathError::NotFound { start, goal });
    }
    if start == goal {
        return Ok(Path::trivial(start));
    }

    let (width, height) = grid.extents();
    let cell_count = width as usize * height as usize;
    // Only called on cells that passed `contains`.
    let index = |c: CellCoord| c.y as usize * width as usize + c.x as usize;

    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut node_of = vec![NO_NODE; cell_count];
    let mut closed  = vec![false; cell_count];
    let mut open    = OpenSet::with_capacity(cell_count.min(1024));
    let mut next_seq = 0u64;
    let mut stats = SearchStats::default();

    nodes.push(SearchNode {
        cell:   start,
        g:      0,
        h:      start.manhattan(goal),
        parent: None,
        seq:    next_seq,
    });
    next_seq += 1;
    node_of[index(start)] = 0;
    open.push(0, &nodes);

    while let Some(current) = open.pop(&nodes) {
        let cell = nodes[current].cell;
        closed[index(cell)] = true;
        stats.expanded += 1;

        if cell == goal {
            let path = reconstruct(&nodes, current);
            trace!(
                %start,
                %goal,
                steps     = path.steps(),
                expanded  = stats.expanded,
                generated = stats.generated,
                decreased = stats.decreased,
                peak_open = stats.peak_open,
                "path found"
            );
            return Ok(path);
        }

        let tentative_g = nodes[current].g + 1;
        for neighbor in cell.neighbors4() {
            if !grid.contains(neighbor) || !grid.is_walkable(neighbor) {
                continue;
            }
            let slot = index(neighbor);
            if closed[slot] {
                continue;
            }

            let existing = node_of[slot];
            match existing {
                NO_NODE => {
                    let id = nodes.len();
                    nodes.push(SearchNode {
                        cell:   neighbor,
                        g:      tentative_g,
                        h:      neighbor.manhattan(goal),
                        parent: Some(current),
                        seq:    next_seq,
                    });
                    next_seq += 1;
                    node_of[slot] = id;
                    open.push(id, &nodes);
                    stats.generated += 1;
                }
                id if tentative_g < nodes[id].g => {
                    nodes[id].g = tentative_g;
                    nodes[id].parent = Some(current);
                    open.decrease_key(id, &nodes);
                    stats.decreased += 1;
                }
                _ => {}
            }
        }
        stats.peak_open = stats.peak_open.max(open.len());
    }

    debug!(%start, %goal, expanded = stats.expanded, "goal unreachable");
    Err(PathError::NotFound { start, goal })
}

/// Walk predecessor links from `goal_node` back to the root, then reverse so
/// the result runs start → goal.
fn reconstruct(nodes: &[SearchNode], goal_node: NodeIdx) -> Path {
    let mut cells = Vec::new();
    let mut cursor = Some(goal_node);
    while let Some(id) = cursor {
        cells.push(nodes[id].cell);
        cursor = nodes[id].parent;
    }
    cells.reverse();
    Path::from_cells(cells)
}
