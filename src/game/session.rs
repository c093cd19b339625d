//! Session driver: owns the game state and turns frame timestamps into ticks

use log::info;
use std::time::Duration;

use super::{
    action::Direction,
    clock::FixedTimestep,
    config::GameConfig,
    engine::GameEngine,
    state::{GameState, Position},
};
use crate::metrics::GameMetrics;
use crate::persistence::{HighScore, ScoreStore};

/// Immutable per-frame view handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid_size: i32,
    /// Head first
    pub snake: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub running: bool,
    pub dead: bool,
}

pub struct Session<S> {
    engine: GameEngine,
    state: GameState,
    clock: FixedTimestep,
    high_score: HighScore<S>,
    metrics: GameMetrics,
}

impl<S: ScoreStore> Session<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_engine(GameEngine::new(config), store)
    }

    pub fn with_engine(mut engine: GameEngine, store: S) -> Self {
        let config = engine.config();
        let clock = FixedTimestep::new(config.tick_duration());
        let high_score = HighScore::new(store, config.high_score_key.clone());
        let state = engine.reset();

        Self {
            engine,
            state,
            clock,
            high_score,
            metrics: GameMetrics::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.best()
    }

    pub fn store(&self) -> &S {
        self.high_score.store()
    }

    /// Begin or resume play. A finished game is replaced by a fresh one first.
    pub fn start(&mut self, now: Duration) {
        if self.state.dead {
            self.reset();
        }
        if !self.state.running {
            self.metrics.on_resume(now);
        }
        self.clock.resync(now);
        self.state.running = true;
    }

    /// Unconditional reset followed by start
    pub fn restart(&mut self, now: Duration) {
        self.reset();
        self.start(now);
    }

    /// Toggle between running and paused; no effect once dead
    pub fn toggle_pause(&mut self, now: Duration) {
        if self.state.dead {
            return;
        }
        if self.state.running {
            self.state.running = false;
            self.metrics.on_pause(now);
        } else {
            self.start(now);
        }
    }

    /// Request a direction change for the next tick
    pub fn turn(&mut self, direction: Direction) -> bool {
        self.state.request_turn(direction)
    }

    /// Raw-vector form of [`Session::turn`]; non-unit vectors are ignored
    pub fn turn_delta(&mut self, dx: i32, dy: i32) -> bool {
        Direction::from_delta(dx, dy).is_some_and(|direction| self.turn(direction))
    }

    /// Feed one display frame. Runs every tick that is due and returns how many ran.
    pub fn frame(&mut self, now: Duration) -> u32 {
        if !self.state.running || self.state.dead {
            self.clock.resync(now);
            self.metrics.update(now);
            return 0;
        }

        let due = self.clock.advance(now);
        let mut ran = 0;
        while ran < due && self.state.running && !self.state.dead {
            let result = self.engine.step(&mut self.state);
            ran += 1;
            if result.terminated {
                self.on_game_over(now);
            }
        }

        self.metrics.update(now);
        ran
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_size: self.engine.grid().size(),
            snake: self.state.snake.cells().collect(),
            food: self.state.food,
            direction: self.state.direction,
            score: self.state.score,
            high_score: self.high_score.best(),
            running: self.state.running,
            dead: self.state.dead,
        }
    }

    fn reset(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
    }

    fn on_game_over(&mut self, now: Duration) {
        let score = self.state.score;
        info!("Game over: score {} after {} steps", score, self.state.steps);

        self.metrics.on_game_over(now);
        self.high_score.record(score);
    }
}
