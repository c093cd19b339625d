//! Grid Snake - a fixed-timestep snake game for the terminal
//!
//! This library provides:
//! - Core game logic: grid, snake, food, step function and session (game module)
//! - High score persistence behind a key-value store (persistence module)
//! - TUI rendering and key mapping (render and input modules)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod persistence;
pub mod render;
