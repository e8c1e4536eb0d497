use super::{
    action::{Action, Direction},
    block::{Block, Position, Rgb},
    config::{GameConfig, WallCheck},
    food::Food,
};
use std::collections::VecDeque;

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the playfield
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the snake is dead
    pub terminated: bool,
    /// Cumulative score
    pub score: u32,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, tail at the front and head at the back
    body: VecDeque<Block>,
    /// Current direction of movement
    direction: Direction,
    score: u32,
    config: GameConfig,
}

impl Snake {
    /// Create a snake at the center of the playfield, facing up
    pub fn spawn(config: &GameConfig) -> Self {
        let center = Position::new(
            config.columns() / 2 * config.block_width,
            config.rows() / 2 * config.block_width,
        );
        Self::new(config, center, Direction::Up, config.initial_snake_length)
    }

    /// Create a snake with the given head, trailing straight behind it
    pub fn new(config: &GameConfig, head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.opposite().delta();
        let step = config.block_width;

        let body = (0..length.max(1) as i32)
            .rev()
            .map(|i| Block::new(head.moved_by(dx * step * i, dy * step * i), step, Rgb::WHITE))
            .collect();

        Self {
            body,
            direction,
            score: 0,
            config: config.clone(),
        }
    }

    /// Advance one cell, eating and relocating the food if the new head lands on it
    pub fn update(&mut self, action: Action, food: &mut Food) -> StepResult {
        // Update direction based on action (prevent 180° turns)
        if let Action::Move(new_direction) = action {
            if !self.direction.is_opposite(new_direction) {
                self.direction = new_direction;
            }
        }

        let previous_head = self.head().position();
        let (dx, dy) = self.direction.delta();
        let step = self.config.block_width;
        let new_head = Block::new(
            previous_head.moved_by(dx * step, dy * step),
            step,
            Rgb::WHITE,
        );
        self.body.push_back(new_head);

        let ate_food = new_head.collides_with(food.block());
        if ate_food {
            self.score += 1;
            food.reset();
        } else {
            self.body.pop_front();
        }

        let hit_self = self.collides_with_body(&new_head);
        let checked = match self.config.wall_check {
            WallCheck::NewHead => new_head.position(),
            WallCheck::PreviousHead => previous_head,
        };
        let hit_wall = !self.config.is_in_bounds(checked.x, checked.y);

        let collision_type = if hit_self {
            Some(CollisionType::SelfCollision)
        } else if hit_wall {
            Some(CollisionType::Wall)
        } else {
            None
        };

        StepResult {
            terminated: collision_type.is_some(),
            score: self.score,
            info: StepInfo {
                ate_food,
                collision_type,
            },
        }
    }

    /// Check if a block overlaps any segment other than the head
    pub fn collides_with_body(&self, block: &Block) -> bool {
        self.body
            .iter()
            .take(self.body.len() - 1)
            .any(|segment| segment.collides_with(block))
    }

    pub fn head(&self) -> &Block {
        // The body is never empty
        &self.body[self.body.len() - 1]
    }

    pub fn tail(&self) -> &Block {
        &self.body[0]
    }

    /// Segments from tail to head
    pub fn segments(&self) -> impl Iterator<Item = &Block> {
        self.body.iter()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; the snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn food_at(config: &GameConfig, x: i32, y: i32) -> Food {
        let mut food = Food::new(config, StdRng::seed_from_u64(1));
        food.place_at(Position::new(x, y));
        food
    }

    #[test]
    fn test_spawned_snake_layout() {
        let config = GameConfig::default();
        let snake = Snake::spawn(&config);

        assert_eq!(snake.len(), 10);
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head().position(), Position::new(250, 250));
        assert_eq!(snake.tail().position(), Position::new(250, 340));
        assert_eq!(snake.score(), 0);
    }

    #[test]
    fn test_snake_creation_trails_behind_head() {
        let config = GameConfig::small();
        let snake = Snake::new(&config, Position::new(50, 50), Direction::Right, 3);
        let positions: Vec<_> = snake.segments().map(Block::position).collect();

        assert_eq!(
            positions,
            vec![
                Position::new(30, 50),
                Position::new(40, 50),
                Position::new(50, 50)
            ]
        );
    }

    #[test]
    fn test_move_keeps_length() {
        let config = GameConfig::small();
        let mut snake = Snake::new(&config, Position::new(50, 50), Direction::Right, 3);
        let mut food = food_at(&config, 0, 0);

        let result = snake.update(Action::Continue, &mut food);

        assert!(!result.terminated);
        assert!(!result.info.ate_food);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head().position(), Position::new(60, 50));
        assert_eq!(snake.tail().position(), Position::new(40, 50));
    }

    #[test]
    fn test_eating_grows_and_relocates_food() {
        let config = GameConfig::small();
        let mut snake = Snake::new(&config, Position::new(50, 50), Direction::Right, 3);
        let mut food = food_at(&config, 60, 50);

        let result = snake.update(Action::Continue, &mut food);

        assert!(result.info.ate_food);
        assert_eq!(result.score, 1);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail().position(), Position::new(30, 50));

        let pos = food.position();
        assert!(config.is_in_bounds(pos.x, pos.y));
        assert_eq!(pos.x % config.block_width, 0);
        assert_eq!(pos.y % config.block_width, 0);
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let config = GameConfig::small();
        let mut snake = Snake::new(&config, Position::new(50, 50), Direction::Right, 3);
        let mut food = food_at(&config, 0, 0);

        snake.update(Action::Move(Direction::Left), &mut food);

        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head().position(), Position::new(60, 50));
    }

    #[test]
    fn test_self_collision_on_overlapping_tick() {
        let config = GameConfig::small();
        // Body (50,90)..(50,50), head at (50,50)
        let mut snake = Snake::new(&config, Position::new(50, 50), Direction::Up, 5);
        let mut food = food_at(&config, 0, 0);

        assert!(!snake.update(Action::Move(Direction::Right), &mut food).terminated);
        assert!(!snake.update(Action::Move(Direction::Down), &mut food).terminated);
        // (50,60) is still occupied by the segment two behind the old head
        let result = snake.update(Action::Move(Direction::Left), &mut food);

        assert!(result.terminated);
        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_following_own_tail_is_safe() {
        let config = GameConfig::small();
        let mut snake = Snake::new(&config, Position::new(50, 50), Direction::Up, 4);
        let mut food = food_at(&config, 0, 0);

        // A 2x2 loop: every head lands on the cell the tail just vacated
        for dir in [Direction::Right, Direction::Down, Direction::Left, Direction::Up] {
            let result = snake.update(Action::Move(dir), &mut food);
            assert!(!result.terminated, "died turning {dir:?}");
        }
    }

    #[test]
    fn test_wall_collision_new_head() {
        let config = GameConfig::small();
        let mut snake = Snake::new(&config, Position::new(0, 0), Direction::Up, 3);
        let mut food = food_at(&config, 90, 90);

        let result = snake.update(Action::Continue, &mut food);

        assert!(result.terminated);
        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
        assert_eq!(snake.head().position(), Position::new(0, -10));
    }

    #[test]
    fn test_wall_collision_previous_head() {
        let config = GameConfig::small().with_wall_check(WallCheck::PreviousHead);
        let mut snake = Snake::new(&config, Position::new(0, 0), Direction::Up, 3);
        let mut food = food_at(&config, 90, 90);

        // Pre-move y=0 is still in bounds
        assert!(!snake.update(Action::Continue, &mut food).terminated);
        let result = snake.update(Action::Continue, &mut food);

        assert!(result.terminated);
        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
        assert_eq!(snake.head().position(), Position::new(0, -20));
    }

    #[test]
    fn test_wall_check_uses_height_for_y() {
        let config = GameConfig {
            game_width: 200,
            game_height: 100,
            initial_snake_length: 3,
            ..Default::default()
        };
        let mut snake = Snake::new(&config, Position::new(0, 90), Direction::Down, 3);
        let mut food = food_at(&config, 190, 0);

        let result = snake.update(Action::Continue, &mut food);
        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
    }
}
