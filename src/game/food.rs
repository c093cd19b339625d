//! Uniform food placement on free cells

use rand::Rng;
use rand::seq::IteratorRandom;

use super::grid::Grid;
use super::state::{Position, Snake};

/// Pick a uniformly random cell not occupied by the snake.
///
/// Rejection sampling is used while the board is at most half full; past that the
/// free cells are enumerated and sampled directly, which has the same distribution
/// but a bounded cost. Returns `None` when the snake covers every cell.
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, grid: &Grid, snake: &Snake) -> Option<Position> {
    let cells = grid.cell_count();
    if snake.len() >= cells {
        return None;
    }

    if snake.len() * 2 <= cells {
        Some(sample_rejecting(rng, grid, snake))
    } else {
        sample_free_cells(rng, grid, snake)
    }
}

fn sample_rejecting<R: Rng + ?Sized>(rng: &mut R, grid: &Grid, snake: &Snake) -> Position {
    loop {
        let x = rng.gen_range(0..grid.size());
        let y = rng.gen_range(0..grid.size());
        let pos = Position::new(x, y);

        if !snake.occupies(pos) {
            return pos;
        }
    }
}

fn sample_free_cells<R: Rng + ?Sized>(rng: &mut R, grid: &Grid, snake: &Snake) -> Option<Position> {
    grid.cells().filter(|pos| !snake.occupies(*pos)).choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::BoundaryPolicy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn all_but(grid: &Grid, free: &[Position]) -> Snake {
        Snake::from_cells(grid.cells().filter(|pos| !free.contains(pos))).unwrap()
    }

    #[test]
    fn test_food_never_on_snake() {
        let grid = Grid::new(5, BoundaryPolicy::Wrap);
        let snake = Snake::from_cells([
            Position::new(2, 2),
            Position::new(1, 2),
            Position::new(0, 2),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let food = place_food(&mut rng, &grid, &snake).unwrap();
            assert!(grid.contains(food));
            assert!(!snake.occupies(food));
        }
    }

    #[test]
    fn test_near_full_board_finds_last_cell() {
        let grid = Grid::new(4, BoundaryPolicy::Wall);
        let free = Position::new(3, 1);
        let snake = all_but(&grid, &[free]);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..20 {
            assert_eq!(place_food(&mut rng, &grid, &snake), Some(free));
        }
    }

    #[test]
    fn test_dense_board_covers_every_free_cell() {
        let grid = Grid::new(4, BoundaryPolicy::Wrap);
        let free = [Position::new(0, 0), Position::new(2, 3), Position::new(3, 3)];
        let snake = all_but(&grid, &free);
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            let food = place_food(&mut rng, &grid, &snake).unwrap();
            assert!(free.contains(&food));
            seen.insert(food);
        }
        assert_eq!(seen.len(), free.len());
    }

    #[test]
    fn test_full_board_has_no_food() {
        let grid = Grid::new(3, BoundaryPolicy::Wrap);
        let snake = all_but(&grid, &[]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(place_food(&mut rng, &grid, &snake), None);
    }
}
