//! The cell arena.
//!
//! Cells live in a single `Vec` laid out column by column, so that index order
//! and [`Point`] order coincide. The arena is sized once at construction and
//! never reallocated; positions are the stable handle to a cell.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cell::{Cell, CellColor};
use crate::geometry::{Dimensions, Point, MAX_TOTAL_CELLS};

/// A rectangle of interior cells surrounded by one ring of rim cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimensions: Dimensions,
    columns: i32,
    rows: i32,
    cells: Vec<Cell>,
}

/// The requested world does not fit in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("world {0} is too large (at most {MAX_TOTAL_CELLS} cells including the rim)")]
pub struct GridSizeError(pub Dimensions);

/// Interior cell counts by display color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    /// Cells with a positive age.
    pub alive: usize,
    /// Interior cells with age 0.
    pub dead: usize,
    pub old: usize,
    pub elder: usize,
}

impl Grid {
    /// Build an all-dead world of the given interior size.
    pub fn new(dimensions: Dimensions) -> Result<Self, GridSizeError> {
        let too_large = GridSizeError(dimensions);
        let total = dimensions.checked_total_cells().ok_or(too_large)?;
        let side = |interior: u32| {
            interior
                .checked_add(2)
                .and_then(|n| i32::try_from(n).ok())
                .ok_or(too_large)
        };
        let columns = side(dimensions.width)?;
        let rows = side(dimensions.height)?;

        let mut cells = Vec::with_capacity(total);
        for x in 0..columns {
            for y in 0..rows {
                let on_rim = x == 0 || y == 0 || x == columns - 1 || y == rows - 1;
                cells.push(if on_rim { Cell::rim() } else { Cell::new() });
            }
        }

        Ok(Self {
            dimensions,
            columns,
            rows,
            cells,
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Total number of cells, rim included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 || point.x >= self.columns || point.y >= self.rows {
            return None;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        Some(x * self.rows as usize + y)
    }

    fn point_at(&self, index: usize) -> Point {
        // index < columns * rows, so both parts fit in i32
        let rows = self.rows as usize;
        Point::new((index / rows) as i32, (index % rows) as i32)
    }

    /// Whether `point` lies on the outer ring.
    pub fn is_rim(&self, point: Point) -> bool {
        point.x == 0 || point.y == 0 || point.x == self.columns - 1 || point.y == self.rows - 1
    }

    pub fn contains(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    pub fn get(&self, point: Point) -> Option<&Cell> {
        self.index(point).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut Cell> {
        self.index(point).map(|i| &mut self.cells[i])
    }

    /// Liveness check that treats anything outside the grid as dead.
    pub fn is_alive_at(&self, point: Point) -> bool {
        self.get(point).is_some_and(Cell::is_alive)
    }

    /// All cells in point order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.point_at(i), cell))
    }

    /// Positions of every non-rim cell in point order.
    pub fn interior_points(&self) -> impl Iterator<Item = Point> + '_ {
        let (columns, rows) = (self.columns, self.rows);
        (1..columns - 1).flat_map(move |x| (1..rows - 1).map(move |y| Point::new(x, y)))
    }

    /// Interior cells row by row, top to bottom, each row left to right.
    pub fn interior_rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Cell> + '_> + '_ {
        let (columns, rows) = (self.columns, self.rows);
        (1..rows - 1).map(move |y| (1..columns - 1).filter_map(move |x| self.get(Point::new(x, y))))
    }

    /// Make the interior cell at `point` alive at age 1.
    ///
    /// Returns `false` for rim or out-of-range positions.
    pub fn spawn(&mut self, point: Point) -> bool {
        match self.get_mut(point) {
            Some(cell) if !cell.is_rim() => {
                *cell = Cell::living();
                true
            }
            _ => false,
        }
    }

    /// Commit the staged update of every cell, rim included.
    pub fn commit_all(&mut self) {
        for cell in &mut self.cells {
            cell.commit();
        }
    }

    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for cell in self.cells.iter().filter(|c| !c.is_rim()) {
            if cell.is_alive() {
                census.alive += 1;
            } else {
                census.dead += 1;
            }
            match cell.color() {
                CellColor::Old => census.old += 1,
                CellColor::Elder => census.elder += 1,
                CellColor::Living | CellColor::Dead => {}
            }
        }
        census
    }
}
