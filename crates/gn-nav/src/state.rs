//! Per-agent navigation state.

use std::collections::VecDeque;

use gn_core::{CellCoord, WorldPos};
use gn_path::Path;

use crate::Objective;

/// What the agent is heading for and the rest of the route there.
///
/// `pending_path` is only valid for the world as it was at the last search;
/// any arrival, objective loss, or divergence empties it.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub current_objective:   Option<Objective>,

    /// Cells still to visit, nearest first.  Does not include the cell the
    /// path was computed from.
    pub pending_path:        VecDeque<CellCoord>,

    pub last_known_position: Option<WorldPos>,

    /// The cell most recently handed to the host.  The agent is expected to
    /// be standing on it at the next tick.
    pub last_dispatched:     Option<CellCoord>,
}

impl NavigationState {
    /// Queue the moves of `path`.  A trivial path queues its single cell so
    /// that an agent already on its objective is told to stay there.
    pub fn load_path(&mut self, path: Path) {
        self.pending_path.clear();
        if path.is_trivial() {
            self.pending_path.push_back(path.goal());
        } else {
            self.pending_path.extend(path.moves().iter().copied());
        }
    }

    pub fn discard_path(&mut self) {
        self.pending_path.clear();
        self.last_dispatched = None;
    }

    /// Forget the objective and its route; the next tick reselects.
    pub fn reset(&mut self) {
        self.current_objective = None;
        self.discard_path();
    }

    /// Dequeue the next cell and remember it as dispatched.
    pub fn dispatch_next(&mut self) -> Option<CellCoord> {
        let next = self.pending_path.pop_front()?;
        self.last_dispatched = Some(next);
        Some(next)
    }
}
