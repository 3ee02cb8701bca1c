//! Initial cultures: seed files and random fills.
//!
//! A seed file starts with a `WIDTHxHEIGHT` header followed by `HEIGHT` rows
//! of exactly `WIDTH` digits. `0` is a dead cell, any other digit a living
//! cell of age 1:
//!
//! ```text
//! 3x3
//! 010
//! 010
//! 010
//! ```

use std::fs;
use std::path::Path;

use cell_culture_core::{Dimensions, Grid, GridSizeError, Point};
use rand::Rng;
use tracing::{debug, warn};

use crate::error::{AutomatonError, AutomatonResult};

/// Parse seed text into a grid (the rim is added around the rows).
pub fn parse_seed(input: &str) -> AutomatonResult<Grid> {
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (_, header) = lines.next().ok_or_else(|| AutomatonError::SeedFormat {
        line: 1,
        message: "missing WIDTHxHEIGHT header".to_string(),
    })?;
    let dimensions = header
        .trim()
        .parse::<Dimensions>()
        .map_err(|e| AutomatonError::SeedFormat {
            line: 1,
            message: e.to_string(),
        })?;
    if dimensions.width == 0 || dimensions.height == 0 {
        return Err(AutomatonError::SeedFormat {
            line: 1,
            message: format!("world {dimensions} has no interior cells"),
        });
    }
    if !dimensions.is_supported() {
        return Err(AutomatonError::SeedFormat {
            line: 1,
            message: GridSizeError(dimensions).to_string(),
        });
    }

    // rows are checked in full before the grid is allocated
    let mut living = Vec::new();
    for (y, row) in (1i32..).zip(0..dimensions.height) {
        let (line_number, line) = lines.next().ok_or_else(|| AutomatonError::SeedFormat {
            line: row as usize + 2,
            message: format!("expected {} rows, found {row}", dimensions.height),
        })?;
        let line = line.trim_end();

        let width = line.chars().count();
        if width != dimensions.width as usize {
            return Err(AutomatonError::SeedFormat {
                line: line_number,
                message: format!("expected {} cells, found {width}", dimensions.width),
            });
        }

        for (x, ch) in (1i32..).zip(line.chars()) {
            match ch {
                '0' => {}
                '1'..='9' => living.push(Point::new(x, y)),
                other => {
                    return Err(AutomatonError::SeedFormat {
                        line: line_number,
                        message: format!("unexpected character {other:?} in column {x}"),
                    });
                }
            }
        }
    }

    let mut grid = Grid::new(dimensions).map_err(|e| AutomatonError::SeedFormat {
        line: 1,
        message: e.to_string(),
    })?;
    for point in living {
        grid.spawn(point);
    }

    let trailing = lines.filter(|(_, line)| !line.trim().is_empty()).count();
    if trailing > 0 {
        warn!(lines = trailing, "seed_trailing_lines_ignored");
    }

    Ok(grid)
}

/// Read and parse a seed file.
pub fn load_seed_file(path: &Path) -> AutomatonResult<Grid> {
    let contents = fs::read_to_string(path).map_err(|source| AutomatonError::SeedFile {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_seed(&contents)?;
    debug!(
        path = %path.display(),
        dimensions = %grid.dimensions(),
        alive = grid.census().alive,
        "seed_file_loaded"
    );
    Ok(grid)
}

/// Fill a fresh world so that each interior cell lives with probability `density`.
///
/// `density` must lie in `0.0..=1.0`.
pub fn random_grid<R: Rng + ?Sized>(
    dimensions: Dimensions,
    density: f64,
    rng: &mut R,
) -> AutomatonResult<Grid> {
    let mut grid = Grid::new(dimensions)?;
    let points: Vec<Point> = grid.interior_points().collect();
    for point in points {
        if rng.random_bool(density) {
            grid.spawn(point);
        }
    }
    Ok(grid)
}
