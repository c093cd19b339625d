//! Core game logic module for Snake
//!
//! This module contains all the game logic without any terminal or rendering
//! dependencies. The session owns the state explicitly; nothing here is global.

pub mod action;
pub mod clock;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use clock::{FixedTimestep, accumulate};
pub use config::{ConfigError, GameConfig, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::place_food;
pub use grid::{BoundaryPolicy, Grid};
pub use session::{Session, Snapshot};
pub use state::{CollisionType, GameState, Position, Snake};
