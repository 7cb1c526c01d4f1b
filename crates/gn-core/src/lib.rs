//! `gn-core`: foundational types for the gridnav workspace.
//!
//! This crate is a dependency of every other `gn-*` crate.  It has no `gn-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`coords`] | `CellCoord` (grid space), `WorldPos` (world space)   |
//! | [`cell`]   | `Cell`, `CellKind`                                   |
//! | [`time`]   | `Tick`                                               |
//! | [`config`] | `GridConfig`, `EpisodeConfig`                        |
//! | [`error`]  | `GnError`, `GnResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod config;
pub mod coords;
pub mod error;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, CellKind};
pub use config::{EpisodeConfig, GridConfig};
pub use coords::{CellCoord, WorldPos};
pub use error::{GnError, GnResult};
pub use time::Tick;
