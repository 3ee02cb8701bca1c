//! The cell state machine.
//!
//! A cell is either dead (`age == 0`) or alive (`age >= 1`). Rule engines
//! describe the next generation by staging an action plus display attributes;
//! [`Cell::commit`] applies the staged update in one step.
//!
//! ```text
//!            Resurrect                 Ignore (age += 1)
//!   Dead ───────────────▶ Alive ◀──────────────┐
//!    ▲                      │  └───────────────┘
//!    └──────── Kill ────────┘
//! ```
//!
//! Rim cells sit outside this machine entirely: they are dead forever and
//! every staging call or commit on them is a no-op for their life state.

use serde::{Deserialize, Serialize};

/// Character shown for a cell that carries no special marker.
pub const DEFAULT_CELL_VALUE: char = '#';

/// Display tag of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellColor {
    Living,
    Dead,
    Old,
    Elder,
}

/// What happens to a cell on the next commit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellAction {
    /// Reset age to 0.
    Kill,
    /// Keep the current life state; a living cell ages by one.
    Ignore,
    /// Bring a dead cell to life at age 1.
    Resurrect,
    /// Leave the age untouched.
    #[default]
    Noop,
}

/// Staged data for the next generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NextUpdate {
    action: CellAction,
    color: CellColor,
    value: char,
    will_be_alive: bool,
}

/// A single square of the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    age: u32,
    color: CellColor,
    value: char,
    rim: bool,
    next: NextUpdate,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// A dead interior cell.
    pub fn new() -> Self {
        Self::with_rim(false)
    }

    /// A rim cell: permanently dead and immutable.
    pub fn rim() -> Self {
        Self::with_rim(true)
    }

    /// An interior cell alive at age 1.
    pub fn living() -> Self {
        let mut cell = Self::new();
        cell.set_next_action(CellAction::Resurrect);
        cell.set_next_color(CellColor::Living);
        cell.commit();
        cell
    }

    fn with_rim(rim: bool) -> Self {
        Self {
            age: 0,
            color: CellColor::Dead,
            value: DEFAULT_CELL_VALUE,
            rim,
            next: NextUpdate {
                action: CellAction::Noop,
                color: CellColor::Dead,
                value: DEFAULT_CELL_VALUE,
                will_be_alive: false,
            },
        }
    }

    /// Living means a non-rim cell with a positive age.
    pub fn is_alive(&self) -> bool {
        !self.rim && self.age > 0
    }

    pub fn is_rim(&self) -> bool {
        self.rim
    }

    /// Number of generations the cell has been alive; 0 when dead.
    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn color(&self) -> CellColor {
        self.color
    }

    pub fn value(&self) -> char {
        self.value
    }

    /// Stage the action for the next commit.
    ///
    /// Rim cells ignore the call. A living cell cannot be resurrected, so
    /// `Resurrect` is downgraded to `Noop` for it.
    pub fn set_next_action(&mut self, action: CellAction) {
        if self.rim {
            return;
        }
        self.next.action = match action {
            CellAction::Resurrect if self.is_alive() => CellAction::Noop,
            other => other,
        };
    }

    pub fn next_action(&self) -> CellAction {
        self.next.action
    }

    pub fn set_next_color(&mut self, color: CellColor) {
        self.next.color = color;
    }

    pub fn next_color(&self) -> CellColor {
        self.next.color
    }

    /// Stage the display character. Control characters such as `'\n'` or
    /// `'\t'` would break the board layout and are dropped, keeping the
    /// previously staged value.
    pub fn set_next_value(&mut self, value: char) {
        if value.is_control() {
            return;
        }
        self.next.value = value;
    }

    pub fn next_value(&self) -> char {
        self.next.value
    }

    /// Advisory flag for consumers that need to know the outcome before the
    /// commit. Not read by the state machine itself.
    pub fn set_alive_next(&mut self, will_be_alive: bool) {
        self.next.will_be_alive = will_be_alive;
    }

    pub fn is_alive_next(&self) -> bool {
        self.next.will_be_alive
    }

    /// Apply the staged update and reset the staged action to `Noop`.
    ///
    /// Display attributes are applied regardless of the action.
    pub fn commit(&mut self) {
        if self.rim {
            self.next.action = CellAction::Noop;
            return;
        }

        match self.next.action {
            CellAction::Kill => self.age = 0,
            CellAction::Ignore => {
                if self.is_alive() {
                    self.age = self.age.saturating_add(1);
                }
            }
            CellAction::Resurrect => self.age = 1,
            CellAction::Noop => {}
        }

        self.color = self.next.color;
        self.value = self.next.value;
        self.next.action = CellAction::Noop;
    }
}
