use std::collections::VecDeque;

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    ///
    /// The result is unbounded; run it through `Grid::resolve` before use.
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    body: VecDeque<Position>,
}

impl Snake {
    /// Create a single-cell snake
    pub fn new(head: Position) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Build a snake from explicit cells, head first.
    ///
    /// Returns `None` for an empty list.
    pub fn from_cells(cells: impl IntoIterator<Item = Position>) -> Option<Self> {
        let body: VecDeque<Position> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Check if the position is occupied by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend a new head
    pub fn push_head(&mut self, head: Position) {
        self.body.push_front(head);
    }

    /// Drop the tail segment, never shrinking below one cell
    pub fn pop_tail(&mut self) -> Option<Position> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Whether the body has no cells. `from_cells` rejects an empty list and
    /// `pop_tail` keeps the head, so a constructed snake never reports empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state
///
/// Owned by whoever drives the simulation; `GameEngine::reset` builds a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Direction applied at the last tick
    pub direction: Direction,
    /// Direction requested for the next tick
    pub pending_direction: Direction,
    pub score: u32,
    pub steps: u32,
    pub running: bool,
    pub dead: bool,
}

impl GameState {
    /// Create a new, idle game state heading in `direction`
    pub fn new(snake: Snake, food: Position, direction: Direction) -> Self {
        Self {
            snake,
            food,
            direction,
            pending_direction: direction,
            score: 0,
            steps: 0,
            running: false,
            dead: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    /// Buffer a direction change for the next tick.
    ///
    /// Reversals of the committed direction are ignored; otherwise the last
    /// request before a tick wins. Returns whether the request was accepted.
    pub fn request_turn(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Promote the pending direction to the committed one
    pub fn commit_direction(&mut self) -> Direction {
        self.direction = self.pending_direction;
        self.direction
    }

    /// Enter the terminal state
    pub fn kill(&mut self) {
        self.dead = true;
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cells: &[(i32, i32)]) -> Snake {
        Snake::from_cells(cells.iter().map(|&(x, y)| Position::new(x, y))).unwrap()
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), snake.tail());
        assert!(Snake::from_cells(std::iter::empty()).is_none());

        let snake = line(&[(2, 2), (1, 2), (0, 2)]);
        assert_eq!(snake.head(), Position::new(2, 2));
        assert_eq!(snake.tail(), Position::new(0, 2));
    }

    #[test]
    fn test_grow_and_shrink() {
        let mut snake = Snake::new(Position::new(2, 2));
        snake.push_head(Position::new(3, 2));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.pop_tail(), Some(Position::new(2, 2)));
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
        assert_eq!(snake.head(), Position::new(3, 2));
    }

    #[test]
    fn test_occupancy() {
        let snake = line(&[(5, 5), (4, 5), (3, 5)]);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(10, 10)));
    }

    #[test]
    fn test_last_turn_request_wins() {
        let mut state = GameState::new(
            Snake::new(Position::new(2, 2)),
            Position::new(0, 0),
            Direction::Right,
        );
        assert!(state.request_turn(Direction::Up));
        assert!(state.request_turn(Direction::Down));
        assert_eq!(state.pending_direction, Direction::Down);
        assert_eq!(state.direction, Direction::Right);

        assert_eq!(state.commit_direction(), Direction::Down);
    }

    #[test]
    fn test_reversal_is_checked_against_committed_direction() {
        for dir in Direction::ALL {
            let mut state =
                GameState::new(Snake::new(Position::new(2, 2)), Position::new(0, 0), dir);
            assert!(!state.request_turn(dir.opposite()));
            assert_eq!(state.pending_direction, dir);
        }
    }

    #[test]
    fn test_kill_stops_running() {
        let mut state = GameState::new(
            Snake::new(Position::new(2, 2)),
            Position::new(0, 0),
            Direction::Right,
        );
        state.running = true;
        state.kill();
        assert!(state.dead);
        assert!(!state.running);
        assert!(!state.is_alive());
    }
}
