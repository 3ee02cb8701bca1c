//! Minimal test fixtures for rule testing.
//!
//! Rule tests usually commit only the cell under test, so the surrounding
//! neighbourhood stays exactly as arranged across several passes.

use cell_culture_core::{Cell, CellAction, Dimensions, Direction, Grid, Point};

/// An all-dead world with the given interior size.
pub fn world(width: u32, height: u32) -> Grid {
    Grid::new(Dimensions::new(width, height)).unwrap()
}

/// Force the cell at `point` to the given age; 0 makes it a fresh dead cell.
pub fn set_age(grid: &mut Grid, point: Point, age: u32) {
    let cell = grid
        .get_mut(point)
        .unwrap_or_else(|| panic!("{point} is outside the grid"));
    assert!(!cell.is_rim(), "{point} is a rim cell");

    if age == 0 {
        *cell = Cell::new();
        return;
    }

    *cell = Cell::living();
    for _ in 1..age {
        cell.set_next_action(CellAction::Ignore);
        cell.commit();
    }
}

/// Bring the first `count` neighbours of `center` along `directions` to life.
pub fn set_alive_neighbours(grid: &mut Grid, center: Point, directions: &[Direction], count: usize) {
    assert!(count <= directions.len(), "only {} directions", directions.len());
    for direction in &directions[..count] {
        let neighbour = center
            .offset(*direction)
            .unwrap_or_else(|| panic!("no neighbour of {center}"));
        set_age(grid, neighbour, 1);
    }
}

/// Commit only the listed cells, leaving every other staged update pending.
pub fn commit_cells(grid: &mut Grid, points: &[Point]) {
    for point in points {
        if let Some(cell) = grid.get_mut(*point) {
            cell.commit();
        }
    }
}

/// Living interior positions in point order.
pub fn alive_points(grid: &Grid) -> Vec<Point> {
    grid.iter()
        .filter(|(_, cell)| cell.is_alive())
        .map(|(point, _)| point)
        .collect()
}
