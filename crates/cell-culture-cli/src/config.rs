//! CLI configuration management.
//!
//! Precedence, lowest first: built-in defaults, the JSON config file, the
//! environment (including a `.env` file), then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cell_culture_automaton::{PopulationConfig, DEFAULT_DENSITY};
use cell_culture_core::Dimensions;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of generations to run.
    pub generations: u64,

    /// Interior size of a random culture.
    pub world_size: Dimensions,

    pub even_rule: String,

    /// Empty means "same as the even rule".
    pub odd_rule: String,

    /// Seed file replacing the random culture.
    pub seed_file: Option<PathBuf>,

    /// Pause between rendered frames.
    pub delay_ms: u64,

    /// Fill probability of a random culture.
    pub density: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generations: 100,
            world_size: Dimensions::default(),
            even_rule: "conway".to_string(),
            odd_rule: String::new(),
            seed_file: None,
            delay_ms: 100,
            density: DEFAULT_DENSITY,
        }
    }
}

impl Config {
    /// Load configuration from the config file and the environment.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a JSON config file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "config_file_loaded");
        Ok(config)
    }

    /// Override fields from `GOL_*` variables looked up through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(generations) = lookup("GOL_GENERATIONS") {
            self.generations = generations
                .parse()
                .with_context(|| format!("GOL_GENERATIONS={generations:?} is not a number"))?;
        }
        if let Some(size) = lookup("GOL_WORLD_SIZE") {
            self.world_size = size
                .parse()
                .with_context(|| format!("GOL_WORLD_SIZE={size:?} is not WIDTHxHEIGHT"))?;
        }
        if let Some(rule) = lookup("GOL_EVEN_RULE") {
            self.even_rule = rule;
        }
        if let Some(rule) = lookup("GOL_ODD_RULE") {
            self.odd_rule = rule;
        }
        if let Some(path) = lookup("GOL_SEED_FILE") {
            self.seed_file = Some(PathBuf::from(path));
        }
        if let Some(delay) = lookup("GOL_DELAY_MS") {
            self.delay_ms = delay
                .parse()
                .with_context(|| format!("GOL_DELAY_MS={delay:?} is not a number"))?;
        }
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "cell-culture", "gol")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Population settings for the library, with an optional RNG seed.
    pub fn population_config(&self, rng_seed: Option<u64>) -> PopulationConfig {
        PopulationConfig {
            dimensions: self.world_size,
            even_rule: self.even_rule.clone(),
            odd_rule: self.odd_rule.clone(),
            seed_file: self.seed_file.clone(),
            rng_seed,
            density: self.density,
        }
    }
}
