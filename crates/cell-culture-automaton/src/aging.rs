//! Age-dependent appearance for the `erik` rule.
//!
//! Ages are judged on the *projected* age, i.e. the age the cell will have
//! once the pending `Ignore` is committed. A survivor whose projected age
//! exceeds [`OLD_AGE_THRESHOLD`] is shown as old; one exceeding
//! [`ELDER_AGE_THRESHOLD`] also carries [`ELDER_MARKER`]. Among the marked
//! cells exactly one, the oldest, is promoted to elder.

use cell_culture_core::{Cell, CellAction, CellColor, Grid, Point, DEFAULT_CELL_VALUE};
use tracing::{debug, warn};

/// Projected age above which a survivor turns old.
pub const OLD_AGE_THRESHOLD: u32 = 5;

/// Projected age above which a survivor is marked as an elder candidate.
pub const ELDER_AGE_THRESHOLD: u32 = 10;

/// Display character of elder candidates.
pub const ELDER_MARKER: char = 'E';

/// Per-pass bookkeeping for the single elder cell.
#[derive(Debug)]
pub(crate) struct ElderTracker {
    previous: Option<Point>,
    candidate: Option<(Point, u32)>,
}

impl ElderTracker {
    /// Start a pass. A stale pointer (the cell was changed outside of a rule
    /// pass) is dropped with a warning.
    pub(crate) fn new(previous: Option<Point>, grid: &Grid) -> Self {
        let previous = previous.filter(|point| {
            let resolves = grid.is_alive_at(*point);
            if !resolves {
                warn!(elder = %point, "elder_pointer_stale");
            }
            resolves
        });

        Self {
            previous,
            candidate: None,
        }
    }

    /// Adjust the staged appearance of one interior cell.
    ///
    /// Must be called after the base action and color are staged.
    pub(crate) fn stage(&mut self, point: Point, cell: &mut Cell, action: CellAction) {
        match action {
            CellAction::Kill => {
                cell.set_next_value(DEFAULT_CELL_VALUE);
                cell.set_next_color(CellColor::Dead);
                if self.previous == Some(point) {
                    debug!(elder = %point, age = cell.age(), "elder_died");
                    self.previous = None;
                }
            }
            CellAction::Resurrect => cell.set_next_value(DEFAULT_CELL_VALUE),
            CellAction::Ignore if cell.is_alive() => {
                let projected = cell.age().saturating_add(1);
                if projected > OLD_AGE_THRESHOLD {
                    cell.set_next_color(CellColor::Old);
                }
                if projected > ELDER_AGE_THRESHOLD {
                    cell.set_next_value(ELDER_MARKER);
                    // strict comparison keeps the earliest point on ties
                    if self.candidate.is_none_or(|(_, best)| projected > best) {
                        self.candidate = Some((point, projected));
                    }
                }
            }
            CellAction::Ignore | CellAction::Noop => {}
        }
    }

    /// Crown the oldest candidate and return the new elder pointer.
    pub(crate) fn finish(self, grid: &mut Grid) -> Option<Point> {
        let Some((point, age)) = self.candidate else {
            if let Some(previous) = self.previous {
                debug!(elder = %previous, "elder_retired");
            }
            return None;
        };

        if let Some(cell) = grid.get_mut(point) {
            cell.set_next_color(CellColor::Elder);
        }
        if self.previous != Some(point) {
            debug!(elder = %point, age, previous = ?self.previous, "elder_promoted");
        }
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{commit_cells, set_age, set_alive_neighbours, world};
    use crate::RuleOfExistence;
    use cell_culture_core::ALL_DIRECTIONS;

    fn survivor_world(age: u32) -> (Grid, Point) {
        let mut grid = world(3, 3);
        let center = Point::new(2, 2);
        set_age(&mut grid, center, age);
        set_alive_neighbours(&mut grid, center, &ALL_DIRECTIONS, 3);
        (grid, center)
    }

    #[test]
    fn test_young_survivor_stays_living() {
        let mut rule = RuleOfExistence::erik();
        let (mut grid, center) = survivor_world(4);

        rule.execute(&mut grid);
        commit_cells(&mut grid, &[center]);

        let cell = grid.get(center).unwrap();
        assert_eq!(cell.age(), 5);
        assert_eq!(cell.color(), CellColor::Living);
        assert_eq!(cell.value(), DEFAULT_CELL_VALUE);
    }

    #[test]
    fn test_survivor_turns_old() {
        let mut rule = RuleOfExistence::erik();
        let (mut grid, center) = survivor_world(4);

        for _ in 0..2 {
            rule.execute(&mut grid);
            commit_cells(&mut grid, &[center]);
        }

        let cell = grid.get(center).unwrap();
        assert_eq!(cell.age(), 6);
        assert_eq!(cell.color(), CellColor::Old);
        assert_eq!(cell.value(), DEFAULT_CELL_VALUE);
        assert_eq!(rule.elder(), None);
    }

    #[test]
    fn test_survivor_becomes_elder() {
        let mut rule = RuleOfExistence::erik();
        let (mut grid, center) = survivor_world(9);

        rule.execute(&mut grid);
        commit_cells(&mut grid, &[center]);
        let cell = grid.get(center).unwrap();
        assert_eq!(cell.age(), 10);
        assert_eq!(cell.color(), CellColor::Old);
        assert_eq!(cell.value(), DEFAULT_CELL_VALUE);
        assert_eq!(rule.elder(), None);

        rule.execute(&mut grid);
        commit_cells(&mut grid, &[center]);
        let cell = grid.get(center).unwrap();
        assert_eq!(cell.age(), 11);
        assert_eq!(cell.color(), CellColor::Elder);
        assert_eq!(cell.value(), ELDER_MARKER);
        assert_eq!(rule.elder(), Some(center));
    }

    #[test]
    fn test_dying_elder_is_reset() {
        let mut rule = RuleOfExistence::erik();
        let (mut grid, center) = survivor_world(11);

        rule.execute(&mut grid);
        commit_cells(&mut grid, &[center]);
        assert_eq!(rule.elder(), Some(center));

        for direction in ALL_DIRECTIONS {
            set_age(&mut grid, center.offset(direction).unwrap(), 0);
        }
        rule.execute(&mut grid);
        commit_cells(&mut grid, &[center]);

        let cell = grid.get(center).unwrap();
        assert_eq!(cell.age(), 0);
        assert_eq!(cell.color(), CellColor::Dead);
        assert_eq!(cell.value(), DEFAULT_CELL_VALUE);
        assert_eq!(rule.elder(), None);
    }

    #[test]
    fn test_single_elder_follows_oldest() {
        let mut rule = RuleOfExistence::erik();
        let mut grid = world(3, 3);
        let (oldest, middle, youngest) = (Point::new(2, 2), Point::new(1, 2), Point::new(1, 1));
        let tracked = [oldest, middle, youngest];
        set_age(&mut grid, oldest, 13);
        set_age(&mut grid, middle, 12);
        set_age(&mut grid, youngest, 11);

        rule.execute(&mut grid);
        commit_cells(&mut grid, &tracked);

        assert_eq!(rule.elder(), Some(oldest));
        let cell = grid.get(oldest).unwrap();
        assert_eq!((cell.age(), cell.color(), cell.value()), (14, CellColor::Elder, 'E'));
        let cell = grid.get(middle).unwrap();
        assert_eq!((cell.age(), cell.color(), cell.value()), (13, CellColor::Old, 'E'));
        let cell = grid.get(youngest).unwrap();
        assert_eq!((cell.age(), cell.color(), cell.value()), (12, CellColor::Old, 'E'));

        // the elder is replaced by a newborn; the crown moves on
        set_age(&mut grid, oldest, 1);
        rule.execute(&mut grid);
        commit_cells(&mut grid, &tracked);

        assert_eq!(rule.elder(), Some(middle));
        let cell = grid.get(middle).unwrap();
        assert_eq!((cell.age(), cell.color(), cell.value()), (14, CellColor::Elder, 'E'));
        let cell = grid.get(youngest).unwrap();
        assert_eq!((cell.age(), cell.color(), cell.value()), (13, CellColor::Old, 'E'));
        let cell = grid.get(oldest).unwrap();
        assert_eq!((cell.age(), cell.color(), cell.value()), (2, CellColor::Living, '#'));
    }

    #[test]
    fn test_tie_goes_to_earliest_point() {
        let mut rule = RuleOfExistence::erik();
        let mut grid = world(3, 3);
        let (first, second) = (Point::new(1, 2), Point::new(2, 1));
        set_age(&mut grid, Point::new(1, 1), 1);
        set_age(&mut grid, first, 20);
        set_age(&mut grid, second, 20);

        rule.execute(&mut grid);
        commit_cells(&mut grid, &[first, second]);

        assert_eq!(rule.elder(), Some(first));
        assert_eq!(grid.get(first).unwrap().color(), CellColor::Elder);
        assert_eq!(grid.get(second).unwrap().color(), CellColor::Old);
    }

    #[test]
    fn test_successor_crowned_in_same_pass_as_death() {
        let mut rule = RuleOfExistence::erik();
        let mut grid = world(5, 5);
        let elder = Point::new(5, 5);
        let helpers = [Point::new(5, 4), Point::new(4, 5)];
        let (a, b, c) = (Point::new(1, 1), Point::new(1, 2), Point::new(2, 1));
        set_age(&mut grid, elder, 20);
        for helper in helpers {
            set_age(&mut grid, helper, 1);
        }
        set_age(&mut grid, a, 11);
        set_age(&mut grid, b, 12);
        set_age(&mut grid, c, 1);

        rule.execute(&mut grid);
        commit_cells(&mut grid, &[elder, a, b]);
        assert_eq!(rule.elder(), Some(elder));

        for helper in helpers {
            set_age(&mut grid, helper, 0);
        }
        rule.execute(&mut grid);
        commit_cells(&mut grid, &[elder, a, b]);

        assert_eq!(rule.elder(), Some(b));
        assert!(!grid.get(elder).unwrap().is_alive());
        assert_eq!(grid.get(elder).unwrap().value(), DEFAULT_CELL_VALUE);
        assert_eq!(grid.get(b).unwrap().color(), CellColor::Elder);
        assert_eq!(grid.get(a).unwrap().color(), CellColor::Old);
    }

    #[test]
    fn test_newborn_drops_stale_marker() {
        let mut rule = RuleOfExistence::erik();
        let mut grid = world(3, 3);
        let center = Point::new(2, 2);
        {
            let cell = grid.get_mut(center).unwrap();
            cell.set_next_value(ELDER_MARKER);
            cell.commit();
        }
        set_alive_neighbours(&mut grid, center, &ALL_DIRECTIONS, 3);

        rule.execute(&mut grid);
        commit_cells(&mut grid, &[center]);

        let cell = grid.get(center).unwrap();
        assert_eq!(cell.age(), 1);
        assert_eq!(cell.value(), DEFAULT_CELL_VALUE);
        assert_eq!(cell.color(), CellColor::Living);
    }

    #[test]
    fn test_stale_pointer_is_dropped() {
        let mut rule = RuleOfExistence::erik();
        let (mut grid, center) = survivor_world(11);

        rule.execute(&mut grid);
        commit_cells(&mut grid, &[center]);
        assert_eq!(rule.elder(), Some(center));

        // removed behind the rule's back
        set_age(&mut grid, center, 0);
        rule.execute(&mut grid);

        assert_eq!(rule.elder(), None);
    }
}
