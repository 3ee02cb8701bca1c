//! Core domain types shared across the Cell Culture workspace.
//!
//! The simulated world is a rectangle of interior cells wrapped in a single
//! ring of immutable rim cells:
//!
//! ```text
//! x → 0 1 2 3 4
//! y 0 R R R R R      R = rim cell (always dead)
//! ↓ 1 R . # . R      . = dead interior cell
//!   2 R . # . R      # = living interior cell
//!   3 R R R R R
//! ```
//!
//! Each [`Cell`] holds its committed state plus a staged update for the next
//! generation. Rule engines only ever stage; the owner of the [`Grid`] commits
//! every cell in one pass once staging is complete.

mod cell;
mod geometry;
mod grid;

pub use cell::{Cell, CellAction, CellColor, DEFAULT_CELL_VALUE};
pub use geometry::{
    Dimensions, Direction, ParseDimensionsError, Point, ALL_DIRECTIONS, CARDINAL, DIAGONAL,
    MAX_TOTAL_CELLS,
};
pub use grid::{Census, Grid, GridSizeError};
