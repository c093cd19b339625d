//! Fixed-size square grid with a static boundary policy

use serde::{Deserialize, Serialize};

use super::state::Position;

/// Rule applied when the head leaves the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoundaryPolicy {
    /// Exiting one edge re-enters at the opposite edge
    #[default]
    Wrap,
    /// Exiting any edge is a fatal collision
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i32,
    policy: BoundaryPolicy,
}

impl Grid {
    /// Panics on a grid smaller than 2x2 or one that does not fit in `i32`;
    /// `GameConfig::validate` rejects both before a grid is ever built.
    pub fn new(size: usize, policy: BoundaryPolicy) -> Self {
        let size = i32::try_from(size).expect("grid size must fit in i32");
        assert!(size >= 2, "grid size must be at least 2");
        Self { size, policy }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    pub fn cell_count(&self) -> usize {
        self.size as usize * self.size as usize
    }

    pub fn center(&self) -> Position {
        let mid = self.size / 2;
        Position::new(mid, mid)
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.size).contains(&pos.x) && (0..self.size).contains(&pos.y)
    }

    /// Maps a single coordinate onto an axis of length `axis_size`.
    ///
    /// Wrap always succeeds (negative inputs included); wall returns `None` for
    /// anything outside `[0, axis_size)`.
    pub fn wrap_or_reject(&self, coord: i32, axis_size: i32) -> Option<i32> {
        match self.policy {
            BoundaryPolicy::Wrap => Some(coord.rem_euclid(axis_size)),
            BoundaryPolicy::Wall => (0..axis_size).contains(&coord).then_some(coord),
        }
    }

    /// Applies the boundary policy to both axes of a candidate position
    pub fn resolve(&self, pos: Position) -> Option<Position> {
        let x = self.wrap_or_reject(pos.x, self.size)?;
        let y = self.wrap_or_reject(pos.y, self.size)?;
        Some(Position::new(x, y))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Position::new(x, y)))
    }
}
