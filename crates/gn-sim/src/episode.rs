//! The `Episode` struct and its tick loop.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, info, trace};

use gn_core::{CellCoord, EpisodeConfig, Tick};
use gn_grid::{GridMap, GridService, Level};
use gn_nav::{NavigationController, Objective};
use gn_path::Pathfinder;

use crate::{EpisodeError, EpisodeObserver, EpisodeResult};

// ── Outcome and per-tick report ───────────────────────────────────────────────

/// How an episode ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EpisodeOutcome {
    /// The agent stood on the exit with no threats or collectibles left.
    Completed { ticks: u64 },
    /// No destination for `idle_ticks` consecutive ticks.
    Stalled { tick: Tick, idle_ticks: u64 },
    /// `max_ticks` elapsed first.
    TickLimit { ticks: u64 },
}

impl fmt::Display for EpisodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EpisodeOutcome::Completed { ticks } => write!(f, "completed in {ticks} ticks"),
            EpisodeOutcome::Stalled { tick, idle_ticks } => {
                write!(f, "stalled at {tick} after {idle_ticks} idle ticks")
            }
            EpisodeOutcome::TickLimit { ticks } => write!(f, "tick limit of {ticks} reached"),
        }
    }
}

/// What happened during one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub tick:      Tick,
    pub from:      CellCoord,
    /// Cell moved onto, or `None` for an idle tick.
    pub to:        Option<CellCoord>,
    /// Objective being pursued after this tick's selection.
    pub objective: Option<Objective>,
    pub arrivals:  Vec<Objective>,
}

// ── Episode ───────────────────────────────────────────────────────────────────

/// One agent driven through one level until an [`EpisodeOutcome`].
///
/// The agent moves exactly one cell per tick onto whatever the controller
/// returns, so the cell handed out is always where the agent stands next tick.
///
/// Create via [`EpisodeBuilder`][crate::EpisodeBuilder].
pub struct Episode<P: Pathfinder> {
    pub config: EpisodeConfig,

    /// The world.  The episode is the only writer; the controller reads it.
    pub level: Level,

    pub controller: NavigationController<P>,

    agent:      CellCoord,
    tick:       Tick,
    idle_ticks: u64,
    /// Threat deactivations keyed by the tick they take effect.
    schedule:   BTreeMap<Tick, Vec<CellCoord>>,
    outcome:    Option<EpisodeOutcome>,
}

impl<P: Pathfinder> Episode<P> {
    pub(crate) fn new(
        config:     EpisodeConfig,
        level:      Level,
        controller: NavigationController<P>,
        agent:      CellCoord,
        schedule:   BTreeMap<Tick, Vec<CellCoord>>,
    ) -> Self {
        Self {
            config,
            level,
            controller,
            agent,
            tick: Tick::ZERO,
            idle_ticks: 0,
            schedule,
            outcome: None,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    pub fn agent(&self) -> CellCoord {
        self.agent
    }

    /// Number of ticks processed so far.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn idle_ticks(&self) -> u64 {
        self.idle_ticks
    }

    /// `Some` once the episode has ended.
    pub fn outcome(&self) -> Option<EpisodeOutcome> {
        self.outcome
    }

    /// Run until an outcome is reached.
    ///
    /// # Errors
    ///
    /// Any fatal controller error, or [`EpisodeError::Finished`] if the
    /// episode had already ended before this call.
    pub fn run<O: EpisodeObserver>(&mut self, observer: &mut O) -> EpisodeResult<EpisodeOutcome> {
        if let Some(outcome) = self.outcome {
            return Err(EpisodeError::Finished(outcome));
        }
        loop {
            observer.on_tick_start(self.tick);
            let report = self.step()?;
            for &objective in &report.arrivals {
                observer.on_arrival(report.tick, objective);
            }
            observer.on_step(&report);

            if let Some(outcome) = self.outcome {
                observer.on_episode_end(&outcome);
                return Ok(outcome);
            }
        }
    }

    /// Process exactly one tick.
    ///
    /// Useful for tests and interactive stepping.  Check
    /// [`outcome`](Self::outcome) afterwards.
    pub fn step(&mut self) -> EpisodeResult<StepReport> {
        if let Some(outcome) = self.outcome {
            return Err(EpisodeError::Finished(outcome));
        }
        let now = self.tick;
        self.apply_schedule(now);

        let from = self.agent;
        let here = self.level.cell_to_world(from);
        let destination = self.controller.next_destination(&self.level, here)?;

        let arrivals = self.controller.take_arrivals();
        for &objective in &arrivals {
            self.apply_arrival(now, objective);
        }

        let to = match destination {
            Some(pos) => {
                let cell = self.level.world_to_cell(pos)?;
                self.agent = cell;
                self.idle_ticks = 0;
                Some(cell)
            }
            None => {
                self.idle_ticks += 1;
                None
            }
        };
        trace!(tick = %now, %from, to = ?to, "step");

        self.tick = now.next();
        self.outcome = self.evaluate();
        if let Some(outcome) = self.outcome {
            info!(%outcome, remaining = self.level.remaining_objectives(), "episode ended");
        }

        Ok(StepReport {
            tick: now,
            from,
            to,
            objective: self.controller.current_objective(),
            arrivals,
        })
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Deactivate every threat scheduled at or before `now`.
    fn apply_schedule(&mut self, now: Tick) {
        while let Some(entry) = self.schedule.first_entry() {
            if *entry.key() > now {
                break;
            }
            for cell in entry.remove() {
                if self.level.deactivate_threat(cell) {
                    debug!(tick = %now, %cell, "threat deactivated externally");
                }
            }
        }
    }

    fn apply_arrival(&mut self, now: Tick, objective: Objective) {
        let applied = match objective {
            Objective::Threat(cell) => self.level.deactivate_threat(cell),
            Objective::Collectible(cell) => self.level.take_collectible(cell),
            Objective::Exit(_) => false,
        };
        debug!(tick = %now, %objective, applied, "arrival applied to level");
    }

    fn evaluate(&self) -> Option<EpisodeOutcome> {
        let on_exit = self.level.exit_cell() == Some(self.agent);
        if on_exit && self.controller.objective_count() == 0 {
            return Some(EpisodeOutcome::Completed { ticks: self.tick.0 });
        }
        if self.idle_ticks >= self.config.max_idle_ticks {
            return Some(EpisodeOutcome::Stalled { tick: self.tick, idle_ticks: self.idle_ticks });
        }
        if self.tick.0 >= self.config.max_ticks {
            return Some(EpisodeOutcome::TickLimit { ticks: self.tick.0 });
        }
        None
    }
}
