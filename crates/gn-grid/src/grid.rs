//! Walkability grid and builder.
//!
//! # Data layout
//!
//! Walkability is one `bool` per cell in **row-major** order:
//!
//! ```text
//! walkable[ y * width + x ]
//! ```
//!
//! Row `y = 0` is the top row; "up" is `y − 1`.  A neighbour lookup is
//! therefore an index offset of `±1` or `±width`, which keeps the search's
//! inner loop a contiguous scan.

use gn_core::{Cell, CellCoord, CellKind, GridConfig, WorldPos};

use crate::{GridError, GridMap, GridResult};

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Rectangular walkability grid placed in world space by a [`GridConfig`].
///
/// Construct with [`GridBuilder`].
#[derive(Clone, Debug)]
pub struct Grid {
    width:    u32,
    height:   u32,
    config:   GridConfig,
    walkable: Vec<bool>,
}

impl Grid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.walkable.len()
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.walkable.iter().filter(|&&w| w).count()
    }

    /// Row-major index of `coord`, or `None` outside the grid.
    #[inline]
    pub fn index_of(&self, coord: CellCoord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn coord_of(&self, index: usize) -> CellCoord {
        let width = self.width as usize;
        CellCoord::new((index % width) as i32, (index / width) as i32)
    }

    /// Change the walkability of one cell (doors, collapsing floors…).
    ///
    /// Searches already in progress never observe this; the next search does.
    pub fn set_walkable(&mut self, coord: CellCoord, walkable: bool) -> GridResult<()> {
        let index = self.index_of(coord).ok_or(GridError::OutOfBounds(coord))?;
        self.walkable[index] = walkable;
        Ok(())
    }
}

impl GridMap for Grid {
    #[inline]
    fn extents(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn is_walkable(&self, coord: CellCoord) -> bool {
        self.index_of(coord)
            .map(|index| self.walkable[index])
            .unwrap_or(false)
    }

    fn cell_at(&self, x: i32, y: i32) -> GridResult<Cell> {
        let coord = CellCoord::new(x, y);
        let index = self.index_of(coord).ok_or(GridError::OutOfBounds(coord))?;
        Ok(Cell::new(coord, self.walkable[index], CellKind::Empty))
    }

    fn world_to_cell(&self, pos: WorldPos) -> GridResult<CellCoord> {
        let size = self.config.cell_size;
        let fx = ((pos.x - self.config.origin.x) / size).floor();
        let fy = ((pos.y - self.config.origin.y) / size).floor();
        // NaN and ±inf fail both range checks.
        let in_range = |v: f32, limit: u32| v >= 0.0 && v < limit as f32;
        if !in_range(fx, self.width) || !in_range(fy, self.height) {
            return Err(GridError::OutsideGrid(pos));
        }
        Ok(CellCoord::new(fx as i32, fy as i32))
    }

    fn cell_to_world(&self, coord: CellCoord) -> WorldPos {
        let size = self.config.cell_size;
        WorldPos::new(
            self.config.origin.x + (coord.x as f32 + 0.5) * size,
            self.config.origin.y + (coord.y as f32 + 0.5) * size,
        )
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`Grid`] incrementally, then call [`build`](Self::build).
///
/// Every cell starts walkable; mark walls with [`block`](Self::block).
///
/// # Example
///
/// ```
/// use gn_core::CellCoord;
/// use gn_grid::{GridBuilder, GridMap};
///
/// let mut b = GridBuilder::new(3, 2);
/// b.block(CellCoord::new(1, 0));
/// let grid = b.build().unwrap();
/// assert_eq!(grid.extents(), (3, 2));
/// assert!(!grid.is_walkable(CellCoord::new(1, 0)));
/// ```
pub struct GridBuilder {
    width:   u32,
    height:  u32,
    config:  GridConfig,
    blocked: Vec<CellCoord>,
}

impl GridBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, config: GridConfig::default(), blocked: Vec::new() }
    }

    /// World placement of the grid.  Default: origin `(0, 0)`, unit cells.
    pub fn config(&mut self, config: GridConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Mark one cell unwalkable.
    pub fn block(&mut self, coord: CellCoord) -> &mut Self {
        self.blocked.push(coord);
        self
    }

    /// Mark every cell in the inclusive rectangle `min..=max` unwalkable.
    pub fn block_rect(&mut self, min: CellCoord, max: CellCoord) -> &mut Self {
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                self.blocked.push(CellCoord::new(x, y));
            }
        }
        self
    }

    /// Validate and produce the [`Grid`].
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` if either side is zero.
    /// - `Config` if the grid config is invalid.
    /// - `OutOfBounds` if a blocked cell lies outside the grid.
    pub fn build(&self) -> GridResult<Grid> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimensions { width: self.width, height: self.height });
        }
        self.config.validate()?;

        let mut grid = Grid {
            width:    self.width,
            height:   self.height,
            config:   self.config,
            walkable: vec![true; self.width as usize * self.height as usize],
        };
        for &coord in &self.blocked {
            grid.set_walkable(coord, false)?;
        }
        Ok(grid)
    }
}
