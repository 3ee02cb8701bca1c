//! The run loop.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use cell_culture_automaton::Population;
use cell_culture_core::{Census, Point};
use tracing::info;

use crate::render::{render_board, CLEAR_SCREEN};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub generations: u64,
    pub delay: Duration,
    pub render: bool,
}

/// Outcome of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub census: Census,
    pub elder: Option<Point>,
}

/// Advance `population` for the requested generations, drawing each frame to
/// `out` before the step when rendering is on.
pub fn run(population: &mut Population, options: &RunOptions, out: &mut impl Write) -> Result<RunSummary> {
    info!(
        generations = options.generations,
        render = options.render,
        delay_ms = options.delay.as_millis() as u64,
        "simulation_started"
    );

    for _ in 0..options.generations {
        if options.render {
            draw(population, out)?;
            if !options.delay.is_zero() {
                thread::sleep(options.delay);
            }
        }
        population.advance_generation();
    }
    if options.render {
        draw(population, out)?;
    }

    let summary = RunSummary {
        generations: population.generation(),
        census: population.census(),
        elder: population.elder(),
    };
    info!(
        generations = summary.generations,
        alive = summary.census.alive,
        "simulation_finished"
    );
    Ok(summary)
}

fn draw(population: &Population, out: &mut impl Write) -> Result<()> {
    write!(out, "{CLEAR_SCREEN}{}", render_board(population)).context("Failed to draw board")?;
    out.flush().context("Failed to flush output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cell_culture_automaton::parse_seed;
    use cell_culture_core::Cell;

    fn blinker() -> Population {
        let grid = parse_seed("3x3\n010\n010\n010\n").unwrap();
        Population::new(grid, "conway", "").unwrap()
    }

    #[test]
    fn test_headless_run() {
        let mut population = blinker();
        let mut out = Vec::new();
        let options = RunOptions {
            generations: 4,
            delay: Duration::ZERO,
            render: false,
        };

        let summary = run(&mut population, &options, &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(summary.generations, 4);
        assert_eq!(summary.census.alive, 3);
        assert_eq!(summary.elder, None);
    }

    #[test]
    fn test_rendered_run_draws_every_frame() {
        let mut population = blinker();
        let mut out = Vec::new();
        let options = RunOptions {
            generations: 2,
            delay: Duration::ZERO,
            render: true,
        };

        run(&mut population, &options, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(CLEAR_SCREEN).count(), 3);
        assert!(text.contains("generation 0 |"));
        assert!(text.contains("generation 2 |"));
    }

    #[test]
    fn test_summary_drops_elder_killed_by_conway() {
        let grid = parse_seed("4x4\n0000\n0110\n0110\n0000\n").unwrap();
        let mut population = Population::new(grid, "erik", "conway").unwrap();
        let options = RunOptions {
            generations: 11,
            delay: Duration::ZERO,
            render: false,
        };

        let summary = run(&mut population, &options, &mut std::io::sink()).unwrap();
        assert_eq!(summary.elder, Some(Point::new(2, 2)));
        assert_eq!(summary.census.elder, 1);

        for point in [Point::new(2, 3), Point::new(3, 2), Point::new(3, 3)] {
            *population.grid_mut().get_mut(point).unwrap() = Cell::new();
        }
        let options = RunOptions {
            generations: 1,
            ..options
        };
        let summary = run(&mut population, &options, &mut std::io::sink()).unwrap();

        assert_eq!(population.even_rule().elder(), Some(Point::new(2, 2)));
        assert_eq!(summary.elder, None);
        assert_eq!(summary.census.alive, 0);
    }

    #[test]
    fn test_zero_generations() {
        let mut population = blinker();
        let options = RunOptions {
            generations: 0,
            delay: Duration::from_millis(500),
            render: false,
        };
        let summary = run(&mut population, &options, &mut std::io::sink()).unwrap();
        assert_eq!(summary.generations, 0);
    }
}
