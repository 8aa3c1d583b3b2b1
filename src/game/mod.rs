//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Randomness is injected through the apple so rounds can be replayed from a seed.

pub mod apple;
pub mod board;
pub mod config;
pub mod direction;
pub mod round;
pub mod snake;

// Re-export commonly used types
pub use apple::Apple;
pub use board::{Board, Cell};
pub use config::GameConfig;
pub use direction::Direction;
pub use round::{Round, RoundEnd, RoundResult};
pub use snake::{Collision, Outcome, Snake, INITIAL_LENGTH, WIN_LENGTH};
