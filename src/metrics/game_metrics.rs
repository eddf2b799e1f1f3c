use std::time::{Duration, Instant};

use crate::game::{CollisionType, TickOutcome};

/// Per-session counters shown beside the board. Nothing is persisted.
///
/// The clock runs from start until game over; a restart zeroes everything
/// except `games_played`.
pub struct GameMetrics {
    started_at: Option<Instant>,
    pub elapsed_time: Duration,
    pub wall_hits: u32,
    pub self_hits: u32,
    pub food_eaten: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started_at: None,
            elapsed_time: Duration::ZERO,
            wall_hits: 0,
            self_hits: 0,
            food_eaten: 0,
            games_played: 0,
        }
    }

    /// Refresh the clock; a no-op once the game has ended
    pub fn update(&mut self) {
        if let Some(started_at) = self.started_at {
            self.elapsed_time = started_at.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.started_at = Some(Instant::now());
        self.elapsed_time = Duration::ZERO;
        self.wall_hits = 0;
        self.self_hits = 0;
        self.food_eaten = 0;
    }

    pub fn record(&mut self, outcome: &TickOutcome) {
        match outcome {
            TickOutcome::Moved { ate_food: true } => self.food_eaten += 1,
            TickOutcome::Penalty { collision, .. } => self.count_collision(*collision),
            TickOutcome::GameOver { collision } => {
                self.count_collision(*collision);
                self.update();
                self.started_at = None;
                self.games_played += 1;
            }
            TickOutcome::Moved { ate_food: false } | TickOutcome::Skipped => {}
        }
    }

    fn count_collision(&mut self, collision: CollisionType) {
        match collision {
            CollisionType::Wall => self.wall_hits += 1,
            CollisionType::SelfCollision => self.self_hits += 1,
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
