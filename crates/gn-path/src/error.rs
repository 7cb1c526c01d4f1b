//! Pathfinding error type.

use thiserror::Error;

use gn_core::CellCoord;

/// Errors produced by a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The goal cannot be reached under current walkability.  Expected and
    /// recoverable: the world may change before the next attempt.
    #[error("no path from {start} to {goal}")]
    NotFound { start: CellCoord, goal: CellCoord },

    /// Start or goal is outside the grid: an integration fault.
    #[error("cell {0} is outside the grid")]
    InvalidCoordinate(CellCoord),
}

impl PathError {
    /// `true` for the recoverable [`PathError::NotFound`] case.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, PathError::NotFound { .. })
    }
}

pub type PathResult<T> = Result<T, PathError>;
