//! Episode observer trait for progress reporting and trajectory capture.

use gn_core::Tick;
use gn_nav::Objective;

use crate::{EpisodeOutcome, StepReport};

/// Callbacks invoked by [`Episode::run`][crate::Episode::run].
///
/// All methods default to no-ops; override only what you need.
///
/// # Example: trajectory recorder
///
/// ```rust,ignore
/// struct Trail(Vec<CellCoord>);
///
/// impl EpisodeObserver for Trail {
///     fn on_step(&mut self, report: &StepReport) {
///         self.0.extend(report.to);
///     }
/// }
/// ```
pub trait EpisodeObserver {
    /// Called before any processing for `tick`.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per objective reached, before `on_step` for the same tick.
    fn on_arrival(&mut self, _tick: Tick, _objective: Objective) {}

    /// Called after the agent has moved (or not) for the tick.
    fn on_step(&mut self, _report: &StepReport) {}

    /// Called exactly once, when the episode ends.
    fn on_episode_end(&mut self, _outcome: &EpisodeOutcome) {}
}

/// An [`EpisodeObserver`] that does nothing.
pub struct NoopObserver;

impl EpisodeObserver for NoopObserver {}
