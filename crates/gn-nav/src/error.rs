use gn_core::CellCoord;
use gn_grid::GridError;
use gn_path::PathError;
use thiserror::Error;

/// Fatal controller errors.  A merely unreachable objective is not an error;
/// it surfaces as `Ok(None)` from `next_destination`.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("level defines no exit")]
    MissingExit,

    #[error("exit {0} is outside the grid")]
    InvalidExit(CellCoord),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("pathfinding failed: {0}")]
    Path(#[from] PathError),
}

pub type NavResult<T> = Result<T, NavError>;
