//! Error types for the automaton system.

use std::path::PathBuf;

use cell_culture_core::GridSizeError;
use thiserror::Error;

/// Result type alias for automaton operations.
pub type AutomatonResult<T> = Result<T, AutomatonError>;

/// Errors that can occur while configuring or seeding a population.
#[derive(Debug, Error)]
pub enum AutomatonError {
    /// A rule name could not be resolved by the factory.
    #[error("unknown rule {name:?} (expected one of: {})", crate::RuleFactory::names().join(", "))]
    InvalidRuleName { name: String },

    /// The world has no interior cells, or is too large to build.
    #[error(
        "invalid world dimensions {width}x{height}: width and height must be >= 1, \
         with at most {} cells including the rim",
        cell_culture_core::MAX_TOTAL_CELLS
    )]
    InvalidDimensions { width: u32, height: u32 },

    /// A configuration value is out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A seed file does not follow the `WxH` + rows format.
    #[error("seed format error on line {line}: {message}")]
    SeedFormat { line: usize, message: String },

    /// A seed file could not be read.
    #[error("could not read seed file {}: {source}", .path.display())]
    SeedFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration serialization/deserialization error.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// I/O error (file operations).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<GridSizeError> for AutomatonError {
    fn from(GridSizeError(dimensions): GridSizeError) -> Self {
        AutomatonError::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        }
    }
}
