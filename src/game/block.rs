/// A position on the playfield, in pixel units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Display color of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
}

/// Axis-aligned square used for collision tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub origin: Position,
    pub side: i32,
}

impl Square {
    /// Strict overlap: squares that only share an edge do not intersect
    pub fn intersects(&self, other: &Square) -> bool {
        self.origin.x < other.origin.x + other.side
            && other.origin.x < self.origin.x + self.side
            && self.origin.y < other.origin.y + other.side
            && other.origin.y < self.origin.y + self.side
    }
}

/// One grid cell of the snake or the food
///
/// Blocks never move; stepping the snake creates a new block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    position: Position,
    side: i32,
    color: Rgb,
}

impl Block {
    pub fn new(position: Position, side: i32, color: Rgb) -> Self {
        Self {
            position,
            side,
            color,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn bounds(&self) -> Square {
        Square {
            origin: self.position,
            side: self.side,
        }
    }

    pub fn collides_with(&self, other: &Block) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(x: i32, y: i32) -> Block {
        Block::new(Position::new(x, y), 10, Rgb::WHITE)
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(50, 50);
        assert_eq!(pos.moved_by(10, 0), Position::new(60, 50));
        assert_eq!(pos.moved_by(0, -10), Position::new(50, 40));
    }

    #[test]
    fn test_same_cell_collides() {
        assert!(block(20, 30).collides_with(&block(20, 30)));
    }

    #[test]
    fn test_adjacent_cells_do_not_collide() {
        let center = block(20, 20);
        assert!(!center.collides_with(&block(30, 20)));
        assert!(!center.collides_with(&block(10, 20)));
        assert!(!center.collides_with(&block(20, 30)));
        assert!(!center.collides_with(&block(20, 10)));
        assert!(!center.collides_with(&block(30, 30)));
    }

    #[test]
    fn test_partial_overlap_collides() {
        assert!(block(20, 20).collides_with(&block(25, 15)));
    }
}
