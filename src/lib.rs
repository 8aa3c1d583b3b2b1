//! Grid Snake - Snake on a fixed 10x10 board
//!
//! This library provides:
//! - Core simulation: snake, apple, board and the round controller (game module)
//! - Fixed-interval round driver and the interactive terminal mode (modes module)
//! - TUI rendering (render module)
//! - Keyboard mapping (input module)
//! - Session bookkeeping such as the carried high score (metrics module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
