//! `gn-sim`: deterministic episode driver for the gridnav workspace.
//!
//! # Tick loop
//!
//! ```text
//! until an outcome is reached:
//!   1. schedule   threats scheduled for this tick are deactivated in the level
//!   2. navigate   NavigationController::next_destination from the agent cell
//!   3. apply      arrivals reported by the controller are applied to the level
//!                 (threat deactivated, collectible taken)
//!   4. move       the agent steps onto the returned cell; no destination
//!                 counts as an idle tick
//!   5. outcome    Completed (on exit, nothing left), Stalled (idle too long),
//!                 or TickLimit
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gn_core::GridConfig;
//! use gn_grid::parse_level;
//! use gn_path::AStarPathfinder;
//! use gn_sim::{EpisodeBuilder, NoopObserver};
//!
//! let parsed = parse_level(text, GridConfig::default())?;
//! let mut episode = EpisodeBuilder::from_parsed(parsed, AStarPathfinder)?.build()?;
//! let outcome = episode.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod episode;
pub mod error;
pub mod observer;


pub use builder::EpisodeBuilder;
pub use episode::{Episode, EpisodeOutcome, StepReport};
pub use error::{EpisodeError, EpisodeResult};
pub use observer::{EpisodeObserver, NoopObserver};
