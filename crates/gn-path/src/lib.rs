//! `gn-path`: optimal shortest paths on a 4-connected walkability grid.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`pathfinder`] | `Pathfinder` trait, `AStarPathfinder`                   |
//! | [`path`]       | `Path`: start→goal inclusive cell sequence             |
//! | `node`         | `SearchNode`: per-search bookkeeping (crate-private)   |
//! | `open_set`     | indexed min-heap with decrease-key (crate-private)      |
//! | [`error`]      | `PathError`, `PathResult<T>`                            |
//!
//! # Contract
//!
//! A search either returns a minimum-step path or
//! [`PathError::NotFound`]; it never returns a partial path.  Unit step cost
//! with the Manhattan heuristic is consistent, so every cell is expanded at
//! most once.

pub mod error;
pub mod path;
pub mod pathfinder;

mod node;
mod open_set;


pub use error::{PathError, PathResult};
pub use path::Path;
pub use pathfinder::{AStarPathfinder, Pathfinder};
