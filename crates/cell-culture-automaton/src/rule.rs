//! Rules of existence.
//!
//! A rule decides the fate of every interior cell for the next generation.
//! All variants share the same algorithm: count the living neighbours inside
//! a fixed geometry, derive an action from the population limits, then stage
//! the action and a matching color. Variants differ only in their geometry
//! and in optional post-processing of the staged appearance.

use std::fmt;

use cell_culture_core::{
    Cell, CellAction, CellColor, Direction, Grid, Point, ALL_DIRECTIONS, CARDINAL,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::aging::ElderTracker;

/// Neighbour-count thresholds driving [`RuleOfExistence::action_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationLimits {
    /// A living cell with fewer neighbours dies.
    pub underpopulation: usize,
    /// A living cell with more neighbours dies.
    pub overpopulation: usize,
    /// A dead cell with exactly this many neighbours is born.
    pub resurrection: usize,
}

impl Default for PopulationLimits {
    fn default() -> Self {
        Self {
            underpopulation: 2,
            overpopulation: 3,
            resurrection: 3,
        }
    }
}

/// The built-in rule variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Classic Game of Life on the Moore neighbourhood.
    Conway,
    /// Conway's thresholds restricted to the four cardinal neighbours.
    VonNeumann,
    /// Conway plus age-based appearance and a single elder cell.
    Erik,
}

impl RuleKind {
    pub const ALL: [RuleKind; 3] = [RuleKind::Conway, RuleKind::VonNeumann, RuleKind::Erik];

    /// Identifier used for lookup and display.
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Conway => "conway",
            RuleKind::VonNeumann => "von_neumann",
            RuleKind::Erik => "erik",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn geometry(&self) -> &'static [Direction] {
        match self {
            RuleKind::Conway | RuleKind::Erik => &ALL_DIRECTIONS,
            RuleKind::VonNeumann => &CARDINAL,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::Conway => "survive with 2-3 of 8 neighbours, born with exactly 3",
            RuleKind::VonNeumann => "survive with 2-3 of 4 cardinal neighbours, born with exactly 3",
            RuleKind::Erik => "conway, with old cells highlighted and the oldest crowned elder",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rule engine instance.
///
/// The grid is never owned: it is borrowed for each evaluation, and mutation
/// only goes through the cell staging API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOfExistence {
    kind: RuleKind,
    limits: PopulationLimits,
    geometry: &'static [Direction],
    elder: Option<Point>,
}

impl RuleOfExistence {
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            limits: PopulationLimits::default(),
            geometry: kind.geometry(),
            elder: None,
        }
    }

    pub fn conway() -> Self {
        Self::new(RuleKind::Conway)
    }

    pub fn von_neumann() -> Self {
        Self::new(RuleKind::VonNeumann)
    }

    pub fn erik() -> Self {
        Self::new(RuleKind::Erik)
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn limits(&self) -> PopulationLimits {
        self.limits
    }

    pub fn geometry(&self) -> &'static [Direction] {
        self.geometry
    }

    /// Position of the current elder cell (aging variant only).
    pub fn elder(&self) -> Option<Point> {
        self.elder
    }

    /// Count living neighbours of `position` within this rule's geometry.
    ///
    /// Any lookup that misses the grid (negative coordinates, beyond the rim,
    /// coordinate overflow) counts as dead.
    pub fn count_alive_neighbours(&self, grid: &Grid, position: Point) -> usize {
        self.geometry
            .iter()
            .filter_map(|direction| position.offset(*direction))
            .filter(|neighbour| grid.is_alive_at(*neighbour))
            .count()
    }

    /// Derive the next action from the neighbour count and current life state.
    pub fn action_for(&self, alive_neighbours: usize, is_alive: bool) -> CellAction {
        let limits = &self.limits;
        match (is_alive, alive_neighbours) {
            (true, n) if n < limits.underpopulation => CellAction::Kill,
            (true, n) if n > limits.overpopulation => CellAction::Kill,
            (true, _) => CellAction::Ignore,
            (false, n) if n == limits.resurrection => CellAction::Resurrect,
            (false, _) => CellAction::Noop,
        }
    }

    /// Stage the next generation for every interior cell of `grid`.
    ///
    /// Only staged fields are written, so every neighbour count observes the
    /// committed previous generation.
    pub fn execute(&mut self, grid: &mut Grid) {
        let mut elders = match self.kind {
            RuleKind::Erik => Some(ElderTracker::new(self.elder, grid)),
            RuleKind::Conway | RuleKind::VonNeumann => None,
        };

        let points: Vec<Point> = grid.interior_points().collect();
        for point in points {
            let alive_neighbours = self.count_alive_neighbours(grid, point);
            let Some(cell) = grid.get_mut(point) else {
                continue;
            };

            let action = self.action_for(alive_neighbours, cell.is_alive());
            stage_transition(cell, action);

            if let Some(tracker) = elders.as_mut() {
                tracker.stage(point, cell, action);
            }
        }

        if let Some(tracker) = elders {
            self.elder = tracker.finish(grid);
        }

        trace!(rule = self.name(), elder = ?self.elder, "rule_executed");
    }
}

/// Stage the action and the color that goes with a birth or a death.
fn stage_transition(cell: &mut Cell, action: CellAction) {
    let will_be_alive = match action {
        CellAction::Resurrect => true,
        CellAction::Kill => false,
        CellAction::Ignore | CellAction::Noop => cell.is_alive(),
    };

    cell.set_next_action(action);
    cell.set_alive_next(will_be_alive);

    match action {
        CellAction::Resurrect => cell.set_next_color(CellColor::Living),
        CellAction::Kill => cell.set_next_color(CellColor::Dead),
        CellAction::Ignore | CellAction::Noop => {}
    }
}
