//! Grid-subsystem error type.

use thiserror::Error;

use gn_core::{CellCoord, GnError, WorldPos};

/// Errors produced by `gn-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell {0} is outside the grid")]
    OutOfBounds(CellCoord),

    #[error("world position {0} maps outside the grid")]
    OutsideGrid(WorldPos),

    #[error("grid dimensions {width}x{height} are invalid")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("cell {0} is not walkable")]
    Blocked(CellCoord),

    #[error("cell {0} already holds an objective")]
    Overlap(CellCoord),

    #[error("level parse error at line {line}, column {column}: {message}")]
    Parse { line: usize, column: usize, message: String },

    #[error(transparent)]
    Config(#[from] GnError),
}

pub type GridResult<T> = Result<T, GridError>;
