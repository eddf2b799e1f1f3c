use super::action::Direction;
use super::config::GameConfig;
use super::queue::InputQueue;

/// Text shown when the NG limit is reached
pub const GAME_OVER_MESSAGE: &str = "Game Over";

/// A position on the board, in board units
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

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.scaled_delta(cell_size);
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a straight snake whose segments trail behind the head, one cell apart
    pub fn new(head: Position, direction: Direction, length: usize, cell_size: i32) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.scaled_delta(cell_size);
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body, direction }
    }

    /// Create a snake from explicit segments, head first; `None` if there are none
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self { body, direction })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Move snake one cell in its current direction, growing if should_grow is true
    pub fn move_snake(&mut self, cell_size: i32, should_grow: bool) {
        let new_head = self.head().moved_in_direction(self.direction, cell_size);
        self.body.insert(0, new_head);

        if !should_grow {
            self.body.pop();
        }
    }

    /// Collapse the snake to a single segment, keeping its direction
    pub fn collapse_to(&mut self, pos: Position) {
        self.body.clear();
        self.body.push(pos);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
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

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing started yet
    Idle,
    Running,
    /// NG limit reached; only a restart leaves this state
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub board_size: i32,
    pub cell_size: i32,
    pub score: u32,
    pub ng_count: u32,
    pub ng_limit: u32,
    pub ticks: u32,
    pub run_state: RunState,
    pub input_queue: InputQueue,
}

impl GameState {
    /// Create a new game state in the Idle state
    pub fn new(snake: Snake, food: Position, config: &GameConfig) -> Self {
        Self {
            snake,
            food,
            board_size: config.board_size,
            cell_size: config.cell_size,
            score: 0,
            ng_count: 0,
            ng_limit: config.ng_limit,
            ticks: 0,
            run_state: RunState::Idle,
            input_queue: InputQueue::new(),
        }
    }

    pub fn tile_count(&self) -> i32 {
        self.board_size / self.cell_size
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.run_state == RunState::GameOver
    }

    /// Message to display for the current state, if any
    pub fn message(&self) -> Option<&'static str> {
        self.is_game_over().then_some(GAME_OVER_MESSAGE)
    }

    /// Queue a direction request for a later tick.
    ///
    /// Ignored unless the game is running. Returns whether the request was queued.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() {
            return false;
        }
        self.input_queue.push(direction)
    }

    /// Check if a position is within the board bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.board_size && pos.y >= 0 && pos.y < self.board_size
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }
}
