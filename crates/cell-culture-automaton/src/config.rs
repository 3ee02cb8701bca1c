//! Population configuration.
//!
//! Loadable from JSON; every field is optional and falls back to its default:
//!
//! ```json
//! {
//!   "dimensions": { "width": 40, "height": 20 },
//!   "even_rule": "erik",
//!   "odd_rule": "von_neumann",
//!   "rng_seed": 7,
//!   "density": 0.25
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use cell_culture_core::{Dimensions, Grid};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AutomatonError, AutomatonResult};
use crate::seed::{load_seed_file, random_grid};

/// Default fill probability of a random culture.
pub const DEFAULT_DENSITY: f64 = 1.0 / 3.0;

/// Everything needed to build a [`crate::Population`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Interior size of a random culture. Ignored when a seed file is given.
    pub dimensions: Dimensions,

    /// Rule applied on even generations.
    pub even_rule: String,

    /// Rule applied on odd generations; empty reuses the even rule.
    pub odd_rule: String,

    /// Seed file to load instead of a random culture.
    pub seed_file: Option<PathBuf>,

    /// Makes the random culture reproducible.
    pub rng_seed: Option<u64>,

    /// Probability that a random interior cell starts alive.
    pub density: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            even_rule: "conway".to_string(),
            odd_rule: String::new(),
            seed_file: None,
            rng_seed: None,
            density: DEFAULT_DENSITY,
        }
    }
}

impl PopulationConfig {
    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> AutomatonResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON file.
    pub fn from_json_file(path: &Path) -> AutomatonResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check value ranges. Rule names are checked when the population is built.
    pub fn validate(&self) -> AutomatonResult<()> {
        let Dimensions { width, height } = self.dimensions;
        let unusable = width == 0 || height == 0 || !self.dimensions.is_supported();
        if self.seed_file.is_none() && unusable {
            return Err(AutomatonError::InvalidDimensions { width, height });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(AutomatonError::InvalidConfig {
                message: format!("density {} must lie within 0.0..=1.0", self.density),
            });
        }
        Ok(())
    }

    /// Build the initial culture from the seed file or a random fill.
    pub fn build_grid(&self) -> AutomatonResult<Grid> {
        self.validate()?;

        if let Some(path) = &self.seed_file {
            return load_seed_file(path);
        }

        let grid = match self.rng_seed {
            Some(seed) => random_grid(self.dimensions, self.density, &mut StdRng::seed_from_u64(seed))?,
            None => random_grid(self.dimensions, self.density, &mut rand::rng())?,
        };
        info!(
            dimensions = %self.dimensions,
            density = self.density,
            rng_seed = ?self.rng_seed,
            "random_culture_created"
        );
        Ok(grid)
    }
}
