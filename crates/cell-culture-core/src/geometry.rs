//! Positions, world dimensions and neighbour offset sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A position in the world.
///
/// `x` is the column and `y` the row. Points order by `x` first, then `y`,
/// which is also the iteration order of every [`Grid`](crate::Grid).
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point one step away in `direction`, or `None` on coordinate overflow.
    pub fn offset(self, direction: Direction) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add(direction.horizontal)?,
            y: self.y.checked_add(direction.vertical)?,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A neighbour offset relative to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub horizontal: i32,
    pub vertical: i32,
}

impl Direction {
    pub const fn new(horizontal: i32, vertical: i32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Moore neighbourhood: N, E, S, W, NE, SE, SW, NW.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
    Direction::new(-1, 0),
    Direction::new(1, -1),
    Direction::new(1, 1),
    Direction::new(-1, 1),
    Direction::new(-1, -1),
];

/// Von Neumann neighbourhood: N, E, S, W.
pub const CARDINAL: [Direction; 4] = [
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
    Direction::new(-1, 0),
];

/// Diagonal-only neighbourhood: NE, SE, SW, NW.
pub const DIAGONAL: [Direction; 4] = [
    Direction::new(1, -1),
    Direction::new(1, 1),
    Direction::new(-1, 1),
    Direction::new(-1, -1),
];

/// Largest grid, rim included, that can be built.
///
/// Keeps every coordinate (and the rim around it) well inside `i32`.
pub const MAX_TOTAL_CELLS: usize = 1 << 24;

/// Size of the simulated world, counted in interior (non-rim) cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of interior cells.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of cells including the rim ring.
    pub fn total_cells(&self) -> usize {
        (self.width as usize + 2).saturating_mul(self.height as usize + 2)
    }

    /// Number of cells including the rim, or `None` when a grid of this size
    /// cannot be built.
    pub fn checked_total_cells(&self) -> Option<usize> {
        let columns = usize::try_from(self.width).ok()?.checked_add(2)?;
        let rows = usize::try_from(self.height).ok()?.checked_add(2)?;
        let total = columns.checked_mul(rows)?;
        (total <= MAX_TOTAL_CELLS).then_some(total)
    }

    pub fn is_supported(&self) -> bool {
        self.checked_total_cells().is_some()
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Error returned when a `WIDTHxHEIGHT` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDimensionsError {
    #[error("expected WIDTHxHEIGHT, got {0:?}")]
    MissingSeparator(String),

    #[error("invalid {axis} {value:?}: must be a non-negative integer")]
    InvalidNumber { axis: &'static str, value: String },
}

impl FromStr for Dimensions {
    type Err = ParseDimensionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (width, height) = trimmed
            .split_once(['x', 'X'])
            .ok_or_else(|| ParseDimensionsError::MissingSeparator(trimmed.to_string()))?;

        let parse = |axis: &'static str, value: &str| {
            value
                .trim()
                .parse::<u32>()
                .map_err(|_| ParseDimensionsError::InvalidNumber {
                    axis,
                    value: value.to_string(),
                })
        };

        Ok(Self {
            width: parse("width", width)?,
            height: parse("height", height)?,
        })
    }
}
