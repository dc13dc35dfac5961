//! Torus Snake - the classic snake game on a wrapping grid
//!
//! This library provides:
//! - Core game logic without any I/O or rendering dependencies (game module)
//! - Key-event to direction mapping (input module)
//! - TUI rendering (render module)
//! - The terminal loop driver (app module)
//! - In-session stats for the header line (stats module)

pub mod app;
pub mod game;
pub mod input;
pub mod render;
pub mod stats;
