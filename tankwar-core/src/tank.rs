//! Tanks, sides, and the four cardinal directions

use serde::{Deserialize, Serialize};

/// A cardinal facing on the field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Fixed order used wherever all four directions are walked
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Unit vector in field coordinates (y grows downward)
    pub fn delta(self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// Which team a tank fights for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Human,
    Bot,
}

/// One tank on the field
///
/// `x`/`y` are the top-left corner of the tank's hitbox in continuous
/// field coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    pub side: Side,
}

impl Tank {
    pub const fn new(id: u32, x: f32, y: f32, direction: Direction, side: Side) -> Self {
        Self { id, x, y, direction, side }
    }

    /// Copy of this tank with only the facing changed
    pub fn facing(&self, direction: Direction) -> Tank {
        Tank { direction, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_copies() {
        let tank = Tank::new(1, 8.0, 24.0, Direction::Up, Side::Bot);
        let turned = tank.facing(Direction::Left);
        assert_eq!(turned.direction, Direction::Left);
        assert_eq!(turned.x, tank.x);
        assert_eq!(turned.y, tank.y);
        // The source tank keeps its facing
        assert_eq!(tank.direction, Direction::Up);
    }

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Up.delta(), (0.0, -1.0));
        assert_eq!(Direction::Down.delta(), (0.0, 1.0));
        assert_eq!(Direction::Left.delta(), (-1.0, 0.0));
        assert_eq!(Direction::Right.delta(), (1.0, 0.0));
    }
}
