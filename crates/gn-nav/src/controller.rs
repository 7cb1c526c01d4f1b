//! The per-tick navigation state machine.

use tracing::{debug, info};

use gn_core::{CellCoord, WorldPos};
use gn_grid::GridService;
use gn_path::{PathError, Pathfinder};

use crate::{NavError, NavResult, NavigationState, Objective, ObjectiveSet, nearest};

/// Decides which objective to pursue and hands out one destination per tick.
///
/// The controller never owns the world.  Every call receives the grid service
/// by reference, so the host is free to mutate the level (deactivate threats,
/// remove collectibles, toggle walls) between ticks.
///
/// # Priority
///
/// While any threat is live, the nearest threat is pursued, however far away
/// and however close a collectible is.  Collectibles are next, then the exit.
/// Once the exit has been selected the controller stays on it for the rest of
/// the episode; threats that appear afterwards are ignored.
///
/// # Replanning
///
/// The cached path is discarded on arrival at any objective, when the current
/// threat vanishes from the live set, and when the agent is found off the
/// cell it was last sent to.  Otherwise it is consumed one cell per tick.
pub struct NavigationController<P: Pathfinder> {
    pathfinder:  P,
    objectives:  ObjectiveSet,
    state:       NavigationState,
    exit_locked: bool,
    /// Objectives reached since the last `take_arrivals`, in order.
    arrivals:    Vec<Objective>,
}

impl<P: Pathfinder> NavigationController<P> {
    /// Capture the exit and the collectibles and load the live threats.
    ///
    /// # Errors
    ///
    /// - [`NavError::MissingExit`] if the world defines no exit.
    /// - [`NavError::InvalidExit`] if the exit lies off the grid.
    pub fn initialize<S: GridService + ?Sized>(world: &S, pathfinder: P) -> NavResult<Self> {
        let exit = world.exit_cell().ok_or(NavError::MissingExit)?;
        if !world.contains(exit) {
            return Err(NavError::InvalidExit(exit));
        }

        let mut objectives = ObjectiveSet::new(exit, world.live_collectibles());
        objectives.sync_threats(world.live_threats());
        info!(
            %exit,
            threats      = objectives.threats().len(),
            collectibles = objectives.collectibles().len(),
            "navigation initialized"
        );

        Ok(Self {
            pathfinder,
            objectives,
            state: NavigationState::default(),
            exit_locked: false,
            arrivals: Vec::new(),
        })
    }

    /// World-space centre of the next cell to move to, or `None` when the
    /// current objective is unreachable this tick.
    ///
    /// `Ok(None)` keeps the objective; the search is retried on the next
    /// call, which succeeds once the grid has changed.
    ///
    /// # Errors
    ///
    /// - [`NavError::Grid`] if `position` lies outside the grid.
    /// - [`NavError::Path`] if the pathfinder rejects a coordinate.
    pub fn next_destination<S: GridService + ?Sized>(
        &mut self,
        world:    &S,
        position: WorldPos,
    ) -> NavResult<Option<WorldPos>> {
        let agent = world.world_to_cell(position)?;
        self.state.last_known_position = Some(position);

        if !self.exit_locked {
            self.refresh_threats(world);
            self.check_arrival(agent);
        }
        self.check_divergence(agent);

        let objective = match self.state.current_objective {
            Some(objective) => objective,
            None => self.select(agent),
        };

        if self.state.pending_path.is_empty() {
            match self.pathfinder.find_path(world, agent, objective.cell()) {
                Ok(path) => {
                    debug!(%objective, from = %agent, steps = path.steps(), "planned");
                    self.state.load_path(path);
                }
                Err(PathError::NotFound { .. }) => {
                    debug!(%objective, from = %agent, "objective unreachable this tick");
                    self.state.last_dispatched = None;
                    return Ok(None);
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(self.state.dispatch_next().map(|cell| world.cell_to_world(cell)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Outstanding threats plus collectibles.  The exit is not counted.
    pub fn objective_count(&self) -> usize {
        self.objectives.remaining()
    }

    pub fn current_objective(&self) -> Option<Objective> {
        self.state.current_objective
    }

    /// Cells left on the cached path.
    pub fn pending_steps(&self) -> usize {
        self.state.pending_path.len()
    }

    pub fn is_exit_locked(&self) -> bool {
        self.exit_locked
    }

    pub fn objectives(&self) -> &ObjectiveSet {
        &self.objectives
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Drain the objectives reached since the previous call, oldest first.
    ///
    /// Hosts use this to apply the world-side effect of an arrival (removing
    /// a collectible, deactivating a threat).
    pub fn take_arrivals(&mut self) -> Vec<Objective> {
        std::mem::take(&mut self.arrivals)
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    fn refresh_threats<S: GridService + ?Sized>(&mut self, world: &S) {
        let retired = self.objectives.sync_threats(world.live_threats());
        if retired > 0 {
            debug!(retired, "threats left the live set");
        }
        if let Some(Objective::Threat(cell)) = self.state.current_objective {
            if !self.objectives.is_live_threat(cell) {
                debug!(%cell, "current threat vanished, reselecting");
                self.state.reset();
            }
        }
    }

    fn check_arrival(&mut self, agent: CellCoord) {
        if let Some(reached) = self.objectives.remove_at(agent) {
            info!(objective = %reached, remaining = self.objectives.remaining(), "objective reached");
            self.arrivals.push(reached);
            self.state.reset();
        }
    }

    fn check_divergence(&mut self, agent: CellCoord) {
        if self.state.pending_path.is_empty() {
            return;
        }
        if let Some(expected) = self.state.last_dispatched {
            if expected != agent {
                debug!(%expected, actual = %agent, "agent off route, replanning");
                self.state.discard_path();
            }
        }
    }

    fn select(&mut self, agent: CellCoord) -> Objective {
        let objective = if let Some(cell) = nearest(agent, self.objectives.threats()) {
            Objective::Threat(cell)
        } else if let Some(cell) = nearest(agent, self.objectives.collectibles()) {
            Objective::Collectible(cell)
        } else {
            if !self.exit_locked {
                self.exit_locked = true;
                info!(exit = %self.objectives.exit(), "all objectives cleared, heading for exit");
            }
            Objective::Exit(self.objectives.exit())
        };
        debug!(%objective, from = %agent, "selected");
        self.state.current_objective = Some(objective);
        self.state.discard_path();
        objective
    }
}
