use gn_core::{CellCoord, GnError};
use gn_grid::GridError;
use gn_nav::NavError;
use thiserror::Error;

use crate::EpisodeOutcome;

#[derive(Debug, Error)]
pub enum EpisodeError {
    #[error("episode configuration error: {0}")]
    Config(#[from] GnError),

    #[error("level has no agent start")]
    MissingStart,

    #[error("agent start {0} is off-grid or not walkable")]
    InvalidStart(CellCoord),

    #[error("episode already finished: {0}")]
    Finished(EpisodeOutcome),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("navigation error: {0}")]
    Nav(#[from] NavError),
}

pub type EpisodeResult<T> = Result<T, EpisodeError>;
