use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which head position is tested against the playfield bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallCheck {
    /// Test the head after it has moved; death on the tick it leaves the field
    #[default]
    NewHead,
    /// Test the head as it was before moving; death one tick after leaving
    PreviousHead,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side of one cell in pixels, also the step size per tick
    pub block_width: i32,
    /// Width of the playfield in pixels
    pub game_width: i32,
    /// Height of the playfield in pixels
    pub game_height: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Ticks per second
    pub tick_rate_hz: u32,
    pub wall_check: WallCheck,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            block_width: 10,
            game_width: 500,
            game_height: 500,
            initial_snake_length: 10,
            tick_rate_hz: 15,
            wall_check: WallCheck::default(),
        }
    }
}

impl GameConfig {
    /// Create a small playfield for testing
    pub fn small() -> Self {
        Self {
            game_width: 100,
            game_height: 100,
            initial_snake_length: 3,
            ..Default::default()
        }
    }

    pub fn with_wall_check(self, wall_check: WallCheck) -> Self {
        Self { wall_check, ..self }
    }

    pub fn columns(&self) -> i32 {
        self.game_width / self.block_width
    }

    pub fn rows(&self) -> i32 {
        self.game_height / self.block_width
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }

    /// Check if a pixel position lies on the playfield
    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.game_width && y >= 0 && y < self.game_height
    }

    /// Check that the grid stays aligned and the starting snake fits
    pub fn validate(&self) -> Result<()> {
        ensure!(self.block_width > 0, "block width must be positive");
        ensure!(
            self.game_width > 0 && self.game_width % self.block_width == 0,
            "game width {} is not a positive multiple of block width {}",
            self.game_width,
            self.block_width
        );
        ensure!(
            self.game_height > 0 && self.game_height % self.block_width == 0,
            "game height {} is not a positive multiple of block width {}",
            self.game_height,
            self.block_width
        );
        ensure!(
            self.initial_snake_length > 0,
            "initial snake length must be at least 1"
        );
        let rows_below_center = (self.rows() - self.rows() / 2) as usize;
        ensure!(
            self.initial_snake_length <= rows_below_center,
            "initial snake length {} does not fit in {} rows",
            self.initial_snake_length,
            rows_below_center
        );
        ensure!(self.tick_rate_hz > 0, "tick rate must be positive");
        Ok(())
    }
}
