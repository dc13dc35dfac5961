//! Core game logic module
//!
//! This module contains all the game logic without any I/O or rendering
//! dependencies. Everything here can be driven headless, which is how the
//! tests exercise it.

pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use config::{GameConfig, Rgb, Theme};
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use grid::{Cell, Grid};
pub use state::{Apple, Drawable, GameState, Snake};
