//! Built-in and randomly generated levels.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use gn_core::CellCoord;
use gn_grid::{GridBuilder, GridMap, GridResult, LevelBuilder, ParsedLevel};

/// Used when neither a level file nor `--seed` is given.
pub const BUILTIN: &str = "\
###########
#A..#....C#
#.#.#.##..#
#.#...#T..#
#.###.#.###
#C....#..E#
###########
";

const WIDTH:        u32 = 24;
const HEIGHT:       u32 = 12;
const WALL_DENSITY: f64 = 0.22;
const THREATS:      usize = 3;
const COLLECTIBLES: usize = 4;

/// A bordered random level.  The same `seed` always yields the same level.
///
/// Interior walls are scattered independently, so some objectives may be
/// walled in; that shows up as idle ticks rather than an error.
pub fn generate(seed: u64) -> GridResult<ParsedLevel> {
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut grid = GridBuilder::new(WIDTH, HEIGHT);
    grid.block_rect(CellCoord::new(0, 0), CellCoord::new(WIDTH as i32 - 1, 0))
        .block_rect(CellCoord::new(0, HEIGHT as i32 - 1), CellCoord::new(WIDTH as i32 - 1, HEIGHT as i32 - 1))
        .block_rect(CellCoord::new(0, 0), CellCoord::new(0, HEIGHT as i32 - 1))
        .block_rect(CellCoord::new(WIDTH as i32 - 1, 0), CellCoord::new(WIDTH as i32 - 1, HEIGHT as i32 - 1));
    for y in 1..HEIGHT as i32 - 1 {
        for x in 1..WIDTH as i32 - 1 {
            if rng.gen_bool(WALL_DENSITY) {
                grid.block(CellCoord::new(x, y));
            }
        }
    }
    let grid = grid.build()?;

    let mut floor: Vec<CellCoord> = (0..grid.cell_count())
        .map(|i| grid.coord_of(i))
        .filter(|&c| grid.is_walkable(c))
        .collect();
    floor.shuffle(&mut rng);
    let mut free = floor.into_iter();

    let agent_start = free.next();
    let mut level = LevelBuilder::new(grid);
    if let Some(exit) = free.next() {
        level.exit(exit);
    }
    for cell in free.by_ref().take(THREATS) {
        level.threat(cell);
    }
    for cell in free.take(COLLECTIBLES) {
        level.collectible(cell);
    }

    Ok(ParsedLevel { level: level.build()?, agent_start })
}
