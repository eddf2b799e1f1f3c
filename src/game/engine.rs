use super::{
    action::Direction,
    config::GameConfig,
    state::{CollisionType, GameState, Position, RunState, Snake},
};
use anyhow::{Context, Result};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed
    Skipped,
    /// The snake moved one cell
    Moved { ate_food: bool },
    /// A collision was survived and the snake collapsed to one segment
    Penalty {
        collision: CollisionType,
        ng_count: u32,
    },
    /// The NG limit was reached
    GameOver { collision: CollisionType },
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TickOutcome::GameOver { .. })
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine; fails if the configuration is invalid
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self> {
        config.validate().context("Invalid game configuration")?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board before the first start: initial layout, nothing running
    pub fn idle(&mut self) -> GameState {
        let snake = self.initial_snake();
        let food = self.spawn_food_avoid_snake(&snake);
        GameState::new(snake, food, &self.config)
    }

    /// Start a fresh game
    pub fn reset(&mut self) -> GameState {
        let mut state = self.idle();
        state.run_state = RunState::Running;
        state
    }

    /// Execute one tick of the game
    pub fn advance(&mut self, state: &mut GameState) -> TickOutcome {
        if !state.is_running() {
            return TickOutcome::Skipped;
        }

        // At most one queued turn per tick, and only onto the other axis
        if let Some(requested) = state.input_queue.pop() {
            if state.snake.direction.is_perpendicular(requested) {
                state.snake.direction = requested;
            } else {
                tracing::debug!(?requested, current = ?state.snake.direction, "turn rejected");
            }
        }

        let new_head = state
            .snake
            .head()
            .moved_in_direction(state.snake.direction, state.cell_size);

        if let Some(collision) = self.check_collision(state, new_head) {
            state.ng_count += 1;

            if state.ng_count >= state.ng_limit {
                state.run_state = RunState::GameOver;
                return TickOutcome::GameOver { collision };
            }

            state.snake.collapse_to(new_head);
            state.food = self.spawn_food_avoid_snake(&state.snake);
            state.ticks += 1;

            return TickOutcome::Penalty {
                collision,
                ng_count: state.ng_count,
            };
        }

        let ate_food = new_head == state.food;

        state.snake.move_snake(state.cell_size, ate_food);

        if ate_food {
            state.score += 1;
            state.food = self.spawn_food_avoid_snake(&state.snake);
        }

        state.ticks += 1;

        TickOutcome::Moved { ate_food }
    }

    /// Move the food to a random free cell
    pub fn place_food(&mut self, state: &mut GameState) {
        state.food = self.spawn_food_avoid_snake(&state.snake);
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_body(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn initial_snake(&self) -> Snake {
        let head = Position::new(self.config.initial_head_tile * self.config.cell_size, 0);
        Snake::new(
            head,
            Direction::Right,
            self.config.initial_snake_length,
            self.config.cell_size,
        )
    }

    /// Rejection-sample a cell not covered by the snake.
    ///
    /// Never returns if the snake covers every cell.
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Position {
        let tiles = self.config.tile_count();
        loop {
            let x = self.rng.gen_range(0..tiles) * self.config.cell_size;
            let y = self.rng.gen_range(0..tiles) * self.config.cell_size;
            let pos = Position::new(x, y);

            if !snake.occupies(pos) {
                return pos;
            }
        }
    }
}
