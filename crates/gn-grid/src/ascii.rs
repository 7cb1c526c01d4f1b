//! Plain-text level format.
//!
//! One line per grid row, top row first (`y = 0`):
//!
//! | Char | Meaning                         |
//! |------|---------------------------------|
//! | `#`  | wall (unwalkable)               |
//! | `.`  | floor                           |
//! | `T`  | threat on floor                 |
//! | `C`  | collectible on floor            |
//! | `E`  | exit on floor (at most one)     |
//! | `A`  | agent start on floor (at most one) |
//!
//! Blank lines are ignored; trailing whitespace is trimmed; all rows must have
//! the same width.

use gn_core::{CellCoord, GridConfig};

use crate::{GridBuilder, GridError, GridMap, GridResult, GridService, Level, LevelBuilder};

/// Output of [`parse_level`].
#[derive(Debug)]
pub struct ParsedLevel {
    pub level:       Level,
    /// Cell marked `A`, if any.
    pub agent_start: Option<CellCoord>,
}

/// Parse the text format into a [`Level`].
///
/// # Example
///
/// ```
/// use gn_core::{CellCoord, GridConfig};
/// use gn_grid::{GridService, parse_level};
///
/// let parsed = parse_level("A.#\n..E\n", GridConfig::default()).unwrap();
/// assert_eq!(parsed.agent_start, Some(CellCoord::new(0, 0)));
/// assert_eq!(parsed.level.exit_cell(), Some(CellCoord::new(2, 1)));
/// ```
pub fn parse_level(text: &str, config: GridConfig) -> GridResult<ParsedLevel> {
    let rows: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let Some(&(first_line, first_row)) = rows.first() else {
        return Err(parse_error(1, 1, "level has no rows"));
    };
    let width = first_row.chars().count();

    let mut walls        = Vec::new();
    let mut threats      = Vec::new();
    let mut collectibles = Vec::new();
    let mut exit         = None;
    let mut agent_start  = None;

    for (y, &(line, row)) in rows.iter().enumerate() {
        if row.chars().count() != width {
            return Err(parse_error(
                line,
                1,
                &format!("row width {} differs from line {first_line} width {width}", row.chars().count()),
            ));
        }
        for (x, ch) in row.chars().enumerate() {
            let cell = CellCoord::new(x as i32, y as i32);
            match ch {
                '#' => walls.push(cell),
                '.' => {}
                'T' => threats.push(cell),
                'C' => collectibles.push(cell),
                'E' => {
                    if exit.replace(cell).is_some() {
                        return Err(parse_error(line, x + 1, "second exit"));
                    }
                }
                'A' => {
                    if agent_start.replace(cell).is_some() {
                        return Err(parse_error(line, x + 1, "second agent start"));
                    }
                }
                other => {
                    return Err(parse_error(line, x + 1, &format!("unknown cell character {other:?}")));
                }
            }
        }
    }

    let mut grid = GridBuilder::new(width as u32, rows.len() as u32);
    grid.config(config);
    for wall in walls {
        grid.block(wall);
    }

    let mut level = LevelBuilder::new(grid.build()?);
    if let Some(exit) = exit {
        level.exit(exit);
    }
    for threat in threats {
        level.threat(threat);
    }
    for collectible in collectibles {
        level.collectible(collectible);
    }

    Ok(ParsedLevel { level: level.build()?, agent_start })
}

/// Render `level` back to the text format, marking `agent` with `A`.
///
/// Only live objectives are drawn.  An agent standing on an objective hides
/// it, matching what a player would see.
pub fn render_level(level: &Level, agent: Option<CellCoord>) -> String {
    let (width, height) = level.extents();
    let threats      = level.live_threats();
    let collectibles = level.live_collectibles();
    let exit         = level.exit_cell();

    let mut out = String::with_capacity((width as usize + 1) * height as usize);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let cell = CellCoord::new(x, y);
            let ch = if agent == Some(cell) {
                'A'
            } else if exit == Some(cell) {
                'E'
            } else if threats.contains(&cell) {
                'T'
            } else if collectibles.contains(&cell) {
                'C'
            } else if level.is_walkable(cell) {
                '.'
            } else {
                '#'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn parse_error(line: usize, column: usize, message: &str) -> GridError {
    GridError::Parse { line, column, message: message.to_string() }
}
