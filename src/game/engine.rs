use super::{
    action::Direction,
    config::GameConfig,
    food::place_food,
    grid::Grid,
    state::{CollisionType, GameState, Snake},
};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Information about a step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// The snake filled the whole grid; no free cell is left for food
    pub board_full: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle(terminated: bool) -> Self {
        Self {
            terminated,
            info: StepInfo::default(),
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a reproducible food sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let grid = Grid::new(config.grid_size, config.boundary);
        Self { config, grid, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Reset the game to initial state
    ///
    /// The snake is a single head at the grid center heading right; the session
    /// is idle until started.
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.grid.center());
        // Grids are at least 2x2, so a one-cell snake always leaves a free cell
        let food = place_food(&mut self.rng, &self.grid, &snake)
            .expect("a grid of at least 2x2 has a free cell after reset");

        GameState::new(snake, food, Direction::Right)
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if state.dead {
            return StepResult::idle(true);
        }
        if !state.running {
            return StepResult::idle(false);
        }

        let direction = state.commit_direction();
        let candidate = state.snake.head().moved_in_direction(direction);
        state.steps += 1;

        // Check for collisions
        let new_head = match self.grid.resolve(candidate) {
            Some(pos) => pos,
            None => return self.collide(state, CollisionType::Wall),
        };
        if state.snake.occupies(new_head) {
            return self.collide(state, CollisionType::SelfCollision);
        }

        state.snake.push_head(new_head);

        let ate_food = new_head == state.food;
        if !ate_food {
            state.snake.pop_tail();
            return StepResult {
                terminated: false,
                info: StepInfo::default(),
            };
        }

        state.score += 1;
        match place_food(&mut self.rng, &self.grid, &state.snake) {
            Some(food) => {
                state.food = food;
                StepResult {
                    terminated: false,
                    info: StepInfo {
                        ate_food,
                        ..Default::default()
                    },
                }
            }
            None => {
                debug!("board full at score {}", state.score);
                state.kill();
                StepResult {
                    terminated: true,
                    info: StepInfo {
                        ate_food,
                        board_full: true,
                        ..Default::default()
                    },
                }
            }
        }
    }

    fn collide(&self, state: &mut GameState, collision: CollisionType) -> StepResult {
        debug!(
            "{:?} collision at step {} with length {}",
            collision,
            state.steps,
            state.snake.len()
        );
        state.kill();

        StepResult {
            terminated: true,
            info: StepInfo {
                collision_type: Some(collision),
                ..Default::default()
            },
        }
    }
}
