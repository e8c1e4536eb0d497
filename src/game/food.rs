use super::{
    block::{Block, Position, Rgb},
    config::GameConfig,
};
use rand::{Rng, rngs::StdRng};

/// The single piece of food on the playfield
///
/// Placement is uniform over every cell, including cells the snake currently
/// occupies.
#[derive(Debug, Clone)]
pub struct Food {
    block: Block,
    block_width: i32,
    columns: i32,
    rows: i32,
    rng: StdRng,
}

impl Food {
    /// Place food at a random cell, drawing from the given generator
    pub fn new(config: &GameConfig, rng: StdRng) -> Self {
        let mut food = Self {
            block: Block::new(Position::new(0, 0), config.block_width, Rgb::GREEN),
            block_width: config.block_width,
            columns: config.columns(),
            rows: config.rows(),
            rng,
        };
        food.reset();
        food
    }

    /// Move the food to a new random cell, discarding the old block
    pub fn reset(&mut self) {
        let x = self.rng.gen_range(0..self.columns) * self.block_width;
        let y = self.rng.gen_range(0..self.rows) * self.block_width;
        self.block = self.block_at(Position::new(x, y));
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn position(&self) -> Position {
        self.block.position()
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, position: Position) {
        self.block = self.block_at(position);
    }

    fn block_at(&self, position: Position) -> Block {
        Block::new(position, self.block_width, Rgb::GREEN)
    }
}
