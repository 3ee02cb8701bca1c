//! The generation loop.
//!
//! A [`Population`] owns the grid and alternates two rule engines: the even
//! rule runs on generations 0, 2, 4, ... and the odd rule on 1, 3, 5, ...
//! Each generation is one full staging pass followed by one commit pass.

use std::fmt;

use cell_culture_core::{Cell, CellColor, Census, Grid, Point};
use tracing::{debug, info, instrument};

use crate::config::PopulationConfig;
use crate::error::AutomatonResult;
use crate::registry::RuleFactory;
use crate::rule::RuleOfExistence;

pub struct Population {
    grid: Grid,
    even_rule: RuleOfExistence,
    /// `None` when odd generations share the even engine.
    odd_rule: Option<RuleOfExistence>,
    generation: u64,
}

impl Population {
    /// Wrap `grid` and resolve both rules by name.
    ///
    /// An empty `odd_rule` makes odd generations reuse the even engine
    /// instance, including its elder state.
    pub fn new(grid: Grid, even_rule: &str, odd_rule: &str) -> AutomatonResult<Self> {
        let (even_rule, odd_rule) = resolve_rules(even_rule, odd_rule)?;
        let population = Self {
            grid,
            even_rule,
            odd_rule,
            generation: 0,
        };
        population.log_initiated();
        Ok(population)
    }

    /// Build the culture described by `config` and resolve its rules.
    pub fn from_config(config: &PopulationConfig) -> AutomatonResult<Self> {
        let grid = config.build_grid()?;
        Self::new(grid, &config.even_rule, &config.odd_rule)
    }

    /// Replace both rule engines. Grid and generation counter are kept.
    ///
    /// On error the previous rules stay in place.
    pub fn initiate(&mut self, even_rule: &str, odd_rule: &str) -> AutomatonResult<()> {
        let (even_rule, odd_rule) = resolve_rules(even_rule, odd_rule)?;
        self.even_rule = even_rule;
        self.odd_rule = odd_rule;
        self.log_initiated();
        Ok(())
    }

    fn log_initiated(&self) {
        info!(
            dimensions = %self.grid.dimensions(),
            even_rule = self.even_rule.name(),
            odd_rule = self.odd_rule().name(),
            alive = self.grid.census().alive,
            "population_initiated"
        );
    }

    /// Run one generation and return the new generation counter.
    pub fn advance_generation(&mut self) -> u64 {
        let Self {
            grid,
            even_rule,
            odd_rule,
            generation,
        } = self;

        let rule = match odd_rule {
            Some(odd) if *generation % 2 == 1 => odd,
            _ => even_rule,
        };
        rule.execute(grid);
        grid.commit_all();
        *generation += 1;

        debug!(
            generation = *generation,
            rule = rule.name(),
            elder = ?rule.elder(),
            "generation_advanced"
        );
        *generation
    }

    /// Advance `count` generations and return the final counter.
    #[instrument(skip(self), fields(start = self.generation))]
    pub fn run_generations(&mut self, count: u64) -> u64 {
        for _ in 0..count {
            self.advance_generation();
        }
        self.generation
    }

    /// Number of generations advanced so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rule that the next call to [`Population::advance_generation`] will run.
    pub fn active_rule(&self) -> &RuleOfExistence {
        if self.generation % 2 == 1 {
            self.odd_rule()
        } else {
            &self.even_rule
        }
    }

    pub fn even_rule(&self) -> &RuleOfExistence {
        &self.even_rule
    }

    pub fn odd_rule(&self) -> &RuleOfExistence {
        self.odd_rule.as_ref().unwrap_or(&self.even_rule)
    }

    /// Position of the living elder cell, if any.
    ///
    /// The aging engine keeps its pointer until its next pass, so a pointer
    /// whose cell died under the other rule is not reported.
    pub fn elder(&self) -> Option<Point> {
        [self.even_rule.elder(), self.odd_rule().elder()]
            .into_iter()
            .flatten()
            .find(|point| {
                self.grid
                    .get(*point)
                    .is_some_and(|cell| cell.is_alive() && cell.color() == CellColor::Elder)
            })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn cell_at(&self, point: Point) -> Option<&Cell> {
        self.grid.get(point)
    }

    /// Number of cells including the rim.
    pub fn total_cell_count(&self) -> usize {
        self.grid.len()
    }

    pub fn census(&self) -> Census {
        self.grid.census()
    }
}

impl fmt::Debug for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Population")
            .field("dimensions", &self.grid.dimensions())
            .field("generation", &self.generation)
            .field("even_rule", &self.even_rule.name())
            .field("odd_rule", &self.odd_rule().name())
            .field("census", &self.grid.census())
            .finish()
    }
}

fn resolve_rules(
    even_rule: &str,
    odd_rule: &str,
) -> AutomatonResult<(RuleOfExistence, Option<RuleOfExistence>)> {
    let even = RuleFactory::create(even_rule)?;
    let odd = if odd_rule.is_empty() {
        None
    } else {
        Some(RuleFactory::create(odd_rule)?)
    };
    Ok((even, odd))
}
