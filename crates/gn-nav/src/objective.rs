//! Objectives and the controller's live objective set.

use std::fmt;

use rustc_hash::FxHashSet;

use gn_core::{CellCoord, CellKind};

/// A cell the agent intends to reach.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Objective {
    Threat(CellCoord),
    Collectible(CellCoord),
    Exit(CellCoord),
}

impl Objective {
    #[inline]
    pub fn cell(self) -> CellCoord {
        match self {
            Objective::Threat(c) | Objective::Collectible(c) | Objective::Exit(c) => c,
        }
    }

    #[inline]
    pub fn class(self) -> CellKind {
        match self {
            Objective::Threat(_)      => CellKind::Threat,
            Objective::Collectible(_) => CellKind::Collectible,
            Objective::Exit(_)        => CellKind::Exit,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.class(), self.cell())
    }
}

// ── ObjectiveSet ──────────────────────────────────────────────────────────────

/// Threats, collectibles, and the fixed exit, as the controller sees them.
///
/// # Invariants
///
/// - The exit is never removed.
/// - A threat or collectible leaves the set at most once per episode and is
///   never re-admitted afterwards, whatever the grid service reports later.
#[derive(Debug, Clone)]
pub struct ObjectiveSet {
    exit:         CellCoord,
    threats:      FxHashSet<CellCoord>,
    collectibles: FxHashSet<CellCoord>,
    /// Every cell that has left the set this episode.
    retired:      FxHashSet<CellCoord>,
}

impl ObjectiveSet {
    /// Start an episode with `collectibles` and no threats; call
    /// [`sync_threats`](Self::sync_threats) to load the live threats.
    pub fn new(exit: CellCoord, collectibles: FxHashSet<CellCoord>) -> Self {
        Self {
            exit,
            threats: FxHashSet::default(),
            collectibles,
            retired: FxHashSet::default(),
        }
    }

    pub fn exit(&self) -> CellCoord {
        self.exit
    }

    pub fn threats(&self) -> &FxHashSet<CellCoord> {
        &self.threats
    }

    pub fn collectibles(&self) -> &FxHashSet<CellCoord> {
        &self.collectibles
    }

    /// Replace the threat set with the authoritative `live` set.
    ///
    /// Threats missing from `live` are retired; retired cells are filtered out
    /// of `live`.  Returns the number of threats retired by this call.
    pub fn sync_threats(&mut self, live: FxHashSet<CellCoord>) -> usize {
        let vanished: Vec<CellCoord> = self
            .threats
            .iter()
            .filter(|c| !live.contains(c))
            .copied()
            .collect();
        self.retired.extend(&vanished);

        let retired = &self.retired;
        self.threats = live.into_iter().filter(|c| !retired.contains(c)).collect();
        vanished.len()
    }

    #[inline]
    pub fn is_live_threat(&self, cell: CellCoord) -> bool {
        self.threats.contains(&cell)
    }

    /// Remove whatever outstanding threat or collectible sits on `cell`.
    pub fn remove_at(&mut self, cell: CellCoord) -> Option<Objective> {
        let removed = if self.threats.remove(&cell) {
            Objective::Threat(cell)
        } else if self.collectibles.remove(&cell) {
            Objective::Collectible(cell)
        } else {
            return None;
        };
        self.retired.insert(cell);
        Some(removed)
    }

    /// Threats plus collectibles still outstanding.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.threats.len() + self.collectibles.len()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.threats.is_empty() && self.collectibles.is_empty()
    }
}
