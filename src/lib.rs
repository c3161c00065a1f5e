//! Grid Snake - single-player Snake on a fixed square board
//!
//! This library provides:
//! - Core game logic and the board projection (game module)
//! - The game lifecycle: live state slot and tick timer (lifecycle module)
//! - Keyboard mapping and TUI rendering (input and render modules)
//! - The terminal play loop (modes module)

pub mod game;
pub mod input;
pub mod lifecycle;
pub mod metrics;
pub mod modes;
pub mod render;
