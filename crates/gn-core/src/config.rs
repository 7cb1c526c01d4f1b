//! Configuration structs.
//!
//! Applications typically load these from JSON (with the `serde` feature) and
//! call `validate()` before handing them to a builder.

use crate::{GnError, GnResult, WorldPos};

// ── GridConfig ────────────────────────────────────────────────────────────────

/// Placement of the grid in world space.
///
/// Cell `(x, y)` covers the square
/// `[origin + (x, y) * cell_size, origin + (x + 1, y + 1) * cell_size)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// World position of the corner of cell `(0, 0)`.
    pub origin: WorldPos,
    /// Side length of one cell in world units.  Default: 1.0.
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { origin: WorldPos::new(0.0, 0.0), cell_size: 1.0 }
    }
}

impl GridConfig {
    pub fn validate(&self) -> GnResult<()> {
        if !self.origin.is_finite() {
            return Err(GnError::Config(format!("grid origin {} is not finite", self.origin)));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(GnError::Config(format!(
                "cell_size must be a positive finite number, got {}",
                self.cell_size
            )));
        }
        Ok(())
    }
}

// ── EpisodeConfig ─────────────────────────────────────────────────────────────

/// Limits for one driven episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EpisodeConfig {
    /// Hard cap on the number of ticks.  Default: 10 000.
    pub max_ticks: u64,

    /// Consecutive ticks without a destination before the episode is declared
    /// stalled.  Default: 16.
    pub max_idle_ticks: u64,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self { max_ticks: 10_000, max_idle_ticks: 16 }
    }
}

impl EpisodeConfig {
    pub fn validate(&self) -> GnResult<()> {
        if self.max_ticks == 0 {
            return Err(GnError::Config("max_ticks must be at least 1".into()));
        }
        if self.max_idle_ticks == 0 {
            return Err(GnError::Config("max_idle_ticks must be at least 1".into()));
        }
        Ok(())
    }
}
