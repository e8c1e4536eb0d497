//! Block Snake - a terminal snake arcade game
//!
//! This library provides:
//! - Core game logic (game module), free of I/O
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
