//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Scheduling lives with the caller: it decides when `GameEngine::advance` runs.

pub mod action;
pub mod config;
pub mod engine;
pub mod queue;
pub mod speed;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use queue::InputQueue;
pub use speed::Speed;
pub use state::{CollisionType, GAME_OVER_MESSAGE, GameState, Position, RunState, Snake};
