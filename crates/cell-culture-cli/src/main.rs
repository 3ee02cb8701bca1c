//! Cell Culture CLI - run Game-of-Life style simulations in the terminal.
//!
//! Without a seed file a random culture is grown; two rules may alternate
//! between even and odd generations.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use cell_culture_automaton::Population;
use cell_culture_core::Dimensions;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod config;
mod render;
mod simulation;

use config::Config;
use simulation::RunOptions;

/// Cell Culture - a generalized Game of Life.
///
/// Rules: conway, von_neumann, erik.
#[derive(Parser, Debug)]
#[command(
    name = "gol",
    author,
    version,
    about = "Cell Culture: run Game-of-Life rules in the terminal",
    long_about = None
)]
struct Cli {
    /// Number of generations to run
    #[arg(short, long)]
    generations: Option<u64>,

    /// World size of a random culture
    #[arg(short, long, value_name = "WxH")]
    size: Option<Dimensions>,

    /// Seed file (WIDTHxHEIGHT header, then rows of digits)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    seed_file: Option<PathBuf>,

    /// Rule for even generations
    #[arg(short, long)]
    even_rule: Option<String>,

    /// Rule for odd generations (defaults to the even rule)
    #[arg(short, long)]
    odd_rule: Option<String>,

    /// RNG seed for a reproducible random culture
    #[arg(long)]
    seed: Option<u64>,

    /// Fill probability of a random culture
    #[arg(long)]
    density: Option<f64>,

    /// Pause between frames in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Skip drawing the board; print only the summary
    #[arg(long)]
    no_render: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Flags take precedence over every other configuration source.
    fn apply_to(&self, config: &mut Config) {
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if let Some(size) = self.size {
            config.world_size = size;
        }
        if let Some(path) = &self.seed_file {
            config.seed_file = Some(path.clone());
        }
        if let Some(rule) = &self.even_rule {
            config.even_rule = rule.clone();
        }
        if let Some(rule) = &self.odd_rule {
            config.odd_rule = rule.clone();
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if let Some(delay) = self.delay_ms {
            config.delay_ms = delay;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut config = Config::load()?;
    cli.apply_to(&mut config);

    let mut population = Population::from_config(&config.population_config(cli.seed))
        .context("Failed to set up the population")?;

    let options = RunOptions {
        generations: config.generations,
        delay: Duration::from_millis(config.delay_ms),
        render: !cli.no_render,
    };
    let stdout = io::stdout();
    let summary = simulation::run(&mut population, &options, &mut stdout.lock())?;

    if !cli.quiet {
        println!(
            "{} generations on {} ({} / {}): {}{}",
            summary.generations,
            population.grid().dimensions(),
            population.even_rule().name(),
            population.odd_rule().name(),
            render::census_line(&summary.census),
            summary
                .elder
                .map(|point| format!(" | elder at {point}"))
                .unwrap_or_default()
        );
    }

    Ok(())
}
