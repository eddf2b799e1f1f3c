//! NG Snake - a terminal Snake game where crashing costs a life instead of the game
//!
//! This library provides:
//! - Core game logic: movement, turn queueing, food, and the NG penalty (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session counters (metrics module)
//! - The interactive loop and its tick scheduler (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
