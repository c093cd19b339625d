use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::grid::BoundaryPolicy;

/// Storage key the high score lives under
pub const DEFAULT_HIGH_SCORE_KEY: &str = "snake_hi_simple";

/// Smallest grid that leaves room for food next to a one-cell snake
pub const MIN_GRID_SIZE: usize = 2;

/// Largest grid whose bordered, two-columns-per-cell board still fits a
/// terminal dimension
pub const MAX_GRID_SIZE: usize = u16::MAX as usize / 2 - 1;

/// Startup-time configuration problems
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least {MIN_GRID_SIZE}, got {0}")]
    GridTooSmall(usize),
    #[error("grid size must be at most {MAX_GRID_SIZE}, got {0}")]
    GridTooLarge(usize),
    #[error("ticks per second must be at least 1")]
    ZeroTickRate,
    #[error("high score key must not be empty")]
    EmptyHighScoreKey,
}

/// Configuration for the game
///
/// Supplied once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square game grid
    pub grid_size: usize,
    /// Simulation ticks per second
    pub ticks_per_second: u32,
    /// What happens when the head leaves the grid
    pub boundary: BoundaryPolicy,
    /// Key under which the high score is persisted
    pub high_score_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            ticks_per_second: 10,
            boundary: BoundaryPolicy::Wrap,
            high_score_key: DEFAULT_HIGH_SCORE_KEY.to_string(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_ticks_per_second(mut self, ticks_per_second: u32) -> Self {
        self.ticks_per_second = ticks_per_second;
        self
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(5)
    }

    /// Fixed duration of one simulation tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.grid_size));
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.high_score_key.trim().is_empty() {
            return Err(ConfigError::EmptyHighScoreKey);
        }
        Ok(())
    }
}
