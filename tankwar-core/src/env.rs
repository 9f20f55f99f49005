//! Per-tick environment snapshot for one tank

use crate::config::ArenaConfig;
use crate::level::Level;
use crate::scan::{look_ahead, BarrierAhead};
use crate::tank::{Direction, Side, Tank};
use serde::{Deserialize, Serialize};

/// Signed offset between two field positions
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub dx: f32,
    pub dy: f32,
}

/// Where the objectives sit relative to the acting tank
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelativePositions {
    pub eagle: Delta,
    /// Absent when no human tank is on the field
    pub nearest_human: Option<Delta>,
}

/// Nearest obstacle per facing
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarrierInfo {
    pub up: BarrierAhead,
    pub down: BarrierAhead,
    pub left: BarrierAhead,
    pub right: BarrierAhead,
}

impl BarrierInfo {
    pub fn get(&self, direction: Direction) -> BarrierAhead {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// Complete immutable snapshot consumed by the priority and fire
/// heuristics; rebuilt from scratch every tick
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TankEnv {
    pub position: RelativePositions,
    pub barriers: BarrierInfo,
}

/// Build the acting tank's view of the field.
///
/// The roster scan keeps the first strict minimum by Manhattan distance
/// among human tanks, so ties resolve to the earliest roster entry.
pub fn sense(level: &Level, tanks: &[Tank], tank: &Tank, cfg: &ArenaConfig) -> TankEnv {
    // The eagle offset is measured from the tank's y on both axes; the
    // movement and fire heuristics are tuned against this arithmetic.
    let eagle = Delta {
        dx: level.eagle.x - tank.y,
        dy: level.eagle.y - tank.y,
    };

    let mut nearest: Option<(f32, &Tank)> = None;
    for other in tanks {
        if other.side == Side::Human {
            let distance = (other.x - tank.x).abs() + (other.y - tank.y).abs();
            if nearest.map_or(true, |(best, _)| distance < best) {
                nearest = Some((distance, other));
            }
        }
    }
    let nearest_human = nearest.map(|(_, enemy)| Delta {
        dx: tank.x - enemy.x,
        dy: tank.y - enemy.y,
    });

    let barriers = BarrierInfo {
        down: look_ahead(level, &tank.facing(Direction::Down), cfg),
        right: look_ahead(level, &tank.facing(Direction::Right), cfg),
        left: look_ahead(level, &tank.facing(Direction::Left), cfg),
        up: look_ahead(level, &tank.facing(Direction::Up), cfg),
    };

    TankEnv {
        position: RelativePositions {
            eagle,
            nearest_human,
        },
        barriers,
    }
}
