//! Core game logic module for Snake
//!
//! Everything here is free of I/O and timers: a [`GameEngine`] maps a
//! [`GameState`] and a [`GameEvent`] to the next state, and a [`Board`] is
//! projected from the result for display.

pub mod board;
pub mod config;
pub mod engine;
pub mod event;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use board::{Board, Cell};
pub use config::{ConfigError, GameConfig, MAX_BOARD_SIZE};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use event::{Direction, GameEvent};
pub use state::{CollisionType, GameState, Position, Snake};
