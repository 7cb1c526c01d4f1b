//! `gn-grid`: walkability grid, grid-service contract, and levels.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`grid`]    | `Grid` (row-major walkability), `GridBuilder`                |
//! | [`service`] | `GridMap` and `GridService` traits consumed by the core      |
//! | [`level`]   | `Level` (grid + exit/threats/collectibles), `LevelBuilder`   |
//! | [`ascii`]   | `parse_level` / `render_level` for the text level format     |
//! | [`error`]   | `GridError`, `GridResult<T>`                                 |

pub mod ascii;
pub mod error;
pub mod grid;
pub mod level;
pub mod service;


pub use ascii::{ParsedLevel, parse_level, render_level};
pub use error::{GridError, GridResult};
pub use grid::{Grid, GridBuilder};
pub use level::{Level, LevelBuilder, Threat};
pub use service::{GridMap, GridService};
