//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A driver calls [`Game::update`] once per tick and reads the state back for drawing.

pub mod action;
pub mod block;
pub mod config;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use block::{Block, Position, Rgb, Square};
pub use config::{GameConfig, WallCheck};
pub use engine::{Game, GameStatus};
pub use food::Food;
pub use state::{CollisionType, Snake, StepInfo, StepResult};
