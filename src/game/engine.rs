use super::{
    action::Action,
    config::GameConfig,
    food::Food,
    state::{Snake, StepInfo, StepResult},
};
use anyhow::Result;
use rand::{SeedableRng, rngs::StdRng};

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Terminal; a new round needs a new `Game`
    Over,
}

/// One round of snake: owns the snake and the food and drives each tick
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    snake: Snake,
    food: Food,
    last: StepResult,
    ticks: u32,
}

impl Game {
    /// Create a new round with food placement seeded from entropy
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a new round with a deterministic food placement sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;

        let snake = Snake::spawn(&config);
        let food = Food::new(&config, rng);

        Ok(Self {
            config,
            snake,
            food,
            last: StepResult {
                terminated: false,
                score: 0,
                info: StepInfo {
                    ate_food: false,
                    collision_type: None,
                },
            },
            ticks: 0,
        })
    }

    /// Execute one tick; a no-op once the game is over
    pub fn update(&mut self, action: Action) -> &StepResult {
        if self.last.terminated {
            return &self.last;
        }

        let result = self.snake.update(action, &mut self.food);
        self.ticks += 1;

        if result.info.ate_food {
            log::debug!(
                "tick {}: ate food, score {}, next food at {:?}",
                self.ticks,
                result.score,
                self.food.position()
            );
        }
        if let Some(collision) = result.info.collision_type {
            log::info!(
                "game over after {} ticks: {:?} heading {}°, score {}",
                self.ticks,
                collision,
                self.snake.direction().degrees(),
                result.score
            );
        }

        self.last = result;
        &self.last
    }

    pub fn status(&self) -> GameStatus {
        if self.last.terminated {
            GameStatus::Over
        } else {
            GameStatus::Running
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status() == GameStatus::Running
    }

    pub fn score(&self) -> u32 {
        self.last.score
    }

    /// Result of the most recent tick
    pub fn last_step(&self) -> &StepResult {
        &self.last
    }

    /// Number of ticks that advanced the snake
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn food_mut(&mut self) -> &mut Food {
        &mut self.food
    }
}
