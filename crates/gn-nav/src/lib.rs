//! `gn-nav`: what to path to next, and when to recompute.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`objective`]  | `Objective`, `ObjectiveSet`: live threats/collectibles/exit |
//! | [`state`]      | `NavigationState`: current objective + consumable path    |
//! | [`selection`]  | `nearest`: R-tree nearest-cell query with stable ties     |
//! | [`controller`] | `NavigationController<P>`: the per-tick state machine     |
//! | [`error`]      | `NavError`, `NavResult<T>`                                 |
//!
//! # Tick model
//!
//! The host calls [`NavigationController::next_destination`] once per tick
//! with the agent's world position:
//!
//! 1. Live threats are re-read from the grid service.
//! 2. If the agent stands on any outstanding threat or collectible, that
//!    objective is removed and the cached path discarded.
//! 3. With no objective, the next one is chosen: nearest threat, else nearest
//!    collectible, else the exit (permanently).
//! 4. With no cached path, the pathfinder is asked for one.  `NotFound`
//!    yields `Ok(None)` for this tick only.
//! 5. One cell is dequeued and returned in world coordinates.

pub mod controller;
pub mod error;
pub mod objective;
pub mod selection;
pub mod state;

#[cfg(test)]
mod tests;

pub use controller::NavigationController;
pub use error::{NavError, NavResult};
pub use objective::{Objective, ObjectiveSet};
pub use selection::nearest;
pub use state::NavigationState;
