//! Rule engines and the generation loop for the Cell Culture simulation.
//!
//! ## Core Concepts
//!
//! - **RuleOfExistence**: counts living neighbours within a geometry and stages
//!   the next action for every interior cell
//! - **RuleKind**: the built-in variants (`conway`, `von_neumann`, `erik`)
//! - **RuleFactory**: resolves rule names; unknown names are an error
//! - **Population**: owns the grid and alternates an even and an odd rule
//!
//! ## The Update Cycle
//!
//! ```text
//! advance_generation():
//!     rule  = generation is even ? even_rule : odd_rule
//!     rule.execute(grid)      // stage only, reads committed state
//!     grid.commit_all()       // apply every staged update at once
//!     generation += 1
//! ```
//!
//! Because staging never touches committed state, every neighbour count within
//! a pass observes the previous generation.

mod aging;
pub mod config;
mod error;
mod population;
mod registry;
mod rule;
pub mod seed;

#[cfg(test)]
mod test_fixtures;

pub use aging::{ELDER_AGE_THRESHOLD, ELDER_MARKER, OLD_AGE_THRESHOLD};
pub use config::{PopulationConfig, DEFAULT_DENSITY};
pub use error::{AutomatonError, AutomatonResult};
pub use population::Population;
pub use registry::RuleFactory;
pub use rule::{PopulationLimits, RuleKind, RuleOfExistence};
pub use seed::{load_seed_file, parse_seed, random_grid};

// Core types used throughout the public API
pub use cell_culture_core::{Cell, CellAction, CellColor, Census, Dimensions, Grid, Point};
