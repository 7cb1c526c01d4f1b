//! Workspace-wide base error type.
//!
//! Sub-crates define their own error enums and wrap `GnError` via `From`
//! where a core failure (currently only configuration) can surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GnError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gn-core`.
pub type GnResult<T> = Result<T, GnError>;
