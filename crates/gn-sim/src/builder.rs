//! Fluent builder for constructing an [`Episode`].

use std::collections::BTreeMap;

use tracing::info;

use gn_core::{CellCoord, EpisodeConfig, Tick};
use gn_grid::{GridMap, GridService, Level, ParsedLevel};
use gn_nav::NavigationController;
use gn_path::Pathfinder;

use crate::{Episode, EpisodeError, EpisodeResult};

/// Fluent builder for [`Episode<P>`].
///
/// # Required inputs
///
/// - [`Level`]: grid plus objectives; the episode takes ownership.
/// - agent start cell: must be walkable.
/// - `P: Pathfinder`: e.g. [`gn_path::AStarPathfinder`].
///
/// # Optional inputs (have defaults)
///
/// | Method                          | Default                    |
/// |---------------------------------|----------------------------|
/// | `.config(c)`                    | `EpisodeConfig::default()` |
/// | `.deactivate_threat_at(t, c)`   | no scheduled changes       |
pub struct EpisodeBuilder<P: Pathfinder> {
    level:      Level,
    start:      CellCoord,
    pathfinder: P,
    config:     EpisodeConfig,
    schedule:   BTreeMap<Tick, Vec<CellCoord>>,
}

impl<P: Pathfinder> EpisodeBuilder<P> {
    pub fn new(level: Level, start: CellCoord, pathfinder: P) -> Self {
        Self {
            level,
            start,
            pathfinder,
            config:   EpisodeConfig::default(),
            schedule: BTreeMap::new(),
        }
    }

    /// Builder from a parsed text level, using its `A` cell as the start.
    ///
    /// # Errors
    ///
    /// [`EpisodeError::MissingStart`] if the level has no `A`.
    pub fn from_parsed(parsed: ParsedLevel, pathfinder: P) -> EpisodeResult<Self> {
        let start = parsed.agent_start.ok_or(EpisodeError::MissingStart)?;
        Ok(Self::new(parsed.level, start, pathfinder))
    }

    pub fn config(mut self, config: EpisodeConfig) -> Self {
        self.config = config;
        self
    }

    /// Deactivate the threat at `cell` at the start of `tick`, as an external
    /// system (another actor, a trigger) would.
    ///
    /// Cells holding no active threat at that time are ignored.
    pub fn deactivate_threat_at(mut self, tick: Tick, cell: CellCoord) -> Self {
        self.schedule.entry(tick).or_default().push(cell);
        self
    }

    /// Validate inputs, initialize the controller, and return a ready-to-run
    /// [`Episode`].
    ///
    /// # Errors
    ///
    /// - `Config` if the episode config is invalid.
    /// - `InvalidStart` if the start cell is off-grid or a wall.
    /// - `Nav` if the controller rejects the level (no exit).
    pub fn build(self) -> EpisodeResult<Episode<P>> {
        self.config.validate()?;
        if !self.level.is_walkable(self.start) {
            return Err(EpisodeError::InvalidStart(self.start));
        }

        let controller = NavigationController::initialize(&self.level, self.pathfinder)?;
        info!(
            start        = %self.start,
            threats      = self.level.live_threats().len(),
            collectibles = self.level.live_collectibles().len(),
            scheduled    = self.schedule.values().map(Vec::len).sum::<usize>(),
            max_ticks    = self.config.max_ticks,
            "episode ready"
        );

        Ok(Episode::new(self.config, self.level, controller, self.start, self.schedule))
    }
}
