//! Key-value persistence for the high score
//!
//! The core only needs string get/set; integer parsing and fallback live in
//! [`HighScore`].

pub mod high_score;
pub mod store;

pub use high_score::HighScore;
pub use store::{FileStore, MemoryStore, ScoreStore};
