//! Movement priorities and direction sampling

use crate::config::ArenaConfig;
use crate::env::TankEnv;
use crate::tank::{Direction, DIRECTIONS};
use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Weight every direction starts from
const BASE_WEIGHT: f32 = 2.0;

/// Bonus when the eagle is at least [`FAR_BLOCKS`] away on the axis
const FAR_BONUS: f32 = 2.0;

/// Bonus when the eagle is at least [`NEAR_BLOCKS`] away on the axis
const NEAR_BONUS: f32 = 1.0;

const FAR_BLOCKS: f32 = 4.0;
const NEAR_BLOCKS: f32 = 2.0;

/// A barrier closer than this (field units) shuts the direction unless
/// the obstacle is destructible
const MIN_CLEARANCE: f32 = 4.0;

// ============================================================================
// PRIORITY MAP
// ============================================================================

/// Non-negative movement weight per direction
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriorityMap {
    pub up: f32,
    pub down: f32,
    pub left: f32,
    pub right: f32,
}

impl PriorityMap {
    pub fn get(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn get_mut(&mut self, direction: Direction) -> &mut f32 {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Sum of all four weights; zero means the tank is boxed in and
    /// sampling is meaningless (callers must check)
    pub fn total(&self) -> f32 {
        self.up + self.down + self.left + self.right
    }
}

/// Score each direction's desirability for one tick.
///
/// Directions that close the gap to the eagle on their axis earn a
/// bonus; a non-destructible barrier inside [`MIN_CLEARANCE`] zeroes
/// the direction outright, bonus included.
pub fn priority_map(env: &TankEnv, cfg: &ArenaConfig) -> PriorityMap {
    let eagle = env.position.eagle;
    let far = FAR_BLOCKS * cfg.block_size;
    let near = NEAR_BLOCKS * cfg.block_size;

    let mut map = PriorityMap {
        up: BASE_WEIGHT,
        down: BASE_WEIGHT,
        left: BASE_WEIGHT,
        right: BASE_WEIGHT,
    };

    if eagle.dy >= far {
        map.down += FAR_BONUS;
    } else if eagle.dy >= near {
        map.down += NEAR_BONUS;
    }

    if eagle.dy <= -far {
        map.up += FAR_BONUS;
    } else if eagle.dy < -near {
        map.up += NEAR_BONUS;
    }

    if eagle.dx <= -far {
        map.left += FAR_BONUS;
    } else if eagle.dx <= -near {
        map.left += NEAR_BONUS;
    }

    if eagle.dx >= far {
        map.right += FAR_BONUS;
    } else if eagle.dx >= near {
        map.right += NEAR_BONUS;
    }

    for direction in DIRECTIONS {
        let ahead = env.barriers.get(direction);
        if ahead.length < MIN_CLEARANCE && !ahead.kind.destructible() {
            *map.get_mut(direction) = 0.0;
        }
    }

    map
}

// ============================================================================
// SAMPLER
// ============================================================================

/// Draw one direction with probability proportional to its weight.
///
/// A uniform value in `[0, total)` is walked down in the fixed
/// up/down/left/right order; zero-weight directions can never win. An
/// all-zero map is a caller error and degenerates to `Right`.
pub fn sample_direction<R: Rng>(map: &PriorityMap, rng: &mut R) -> Direction {
    let mut n = rng.gen::<f32>() * map.total();
    n -= map.up;
    if n < 0.0 {
        return Direction::Up;
    }
    n -= map.down;
    if n < 0.0 {
        return Direction::Down;
    }
    n -= map.left;
    if n < 0.0 {
        return Direction::Left;
    }
    Direction::Right
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{BarrierInfo, Delta, RelativePositions};
    use crate::scan::{BarrierAhead, ObstacleKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn open_barriers() -> BarrierInfo {
        let open = BarrierAhead {
            kind: ObstacleKind::Border,
            length: 100.0,
        };
        BarrierInfo {
            up: open,
            down: open,
            left: open,
            right: open,
        }
    }

    fn env_with_eagle(dx: f32, dy: f32) -> TankEnv {
        TankEnv {
            position: RelativePositions {
                eagle: Delta { dx, dy },
                nearest_human: None,
            },
            barriers: open_barriers(),
        }
    }

    #[test]
    fn test_baseline_weights() {
        let cfg = ArenaConfig::default();
        let map = priority_map(&env_with_eagle(0.0, 0.0), &cfg);
        for direction in DIRECTIONS {
            assert_eq!(map.get(direction), 2.0);
        }
    }

    #[test]
    fn test_eagle_bonus_monotonic_down() {
        let cfg = ArenaConfig::default();
        // Near, moderately far, far on the +y axis: 2 -> 3 -> 4.
        let near = priority_map(&env_with_eagle(0.0, 16.0), &cfg);
        let mid = priority_map(&env_with_eagle(0.0, 40.0), &cfg);
        let far = priority_map(&env_with_eagle(0.0, 80.0), &cfg);
        assert_eq!(near.down, 2.0);
        assert_eq!(mid.down, 3.0);
        assert_eq!(far.down, 4.0);
    }

    #[test]
    fn test_eagle_bonus_monotonic_up() {
        let cfg = ArenaConfig::default();
        let near = priority_map(&env_with_eagle(0.0, -16.0), &cfg);
        let mid = priority_map(&env_with_eagle(0.0, -40.0), &cfg);
        let far = priority_map(&env_with_eagle(0.0, -80.0), &cfg);
        assert_eq!(near.up, 2.0);
        assert_eq!(mid.up, 3.0);
        assert_eq!(far.up, 4.0);
    }

    #[test]
    fn test_eagle_bonus_moderate_bound_is_strict_for_up() {
        let cfg = ArenaConfig::default();
        // dy == -2 blocks exactly: down/left/right treat the bound as
        // inclusive, up does not.
        let map = priority_map(&env_with_eagle(0.0, -32.0), &cfg);
        assert_eq!(map.up, 2.0);
        let map = priority_map(&env_with_eagle(0.0, 32.0), &cfg);
        assert_eq!(map.down, 3.0);
    }

    #[test]
    fn test_eagle_bonus_left_right() {
        let cfg = ArenaConfig::default();
        let map = priority_map(&env_with_eagle(-80.0, 0.0), &cfg);
        assert_eq!(map.left, 4.0);
        assert_eq!(map.right, 2.0);
        let map = priority_map(&env_with_eagle(80.0, 0.0), &cfg);
        assert_eq!(map.right, 4.0);
        assert_eq!(map.left, 2.0);
    }

    #[test]
    fn test_close_steel_zeroes_direction_over_bonus() {
        let cfg = ArenaConfig::default();
        let mut env = env_with_eagle(0.0, 80.0);
        env.barriers.down = BarrierAhead {
            kind: ObstacleKind::Steel,
            length: 1.0,
        };
        let map = priority_map(&env, &cfg);
        assert_eq!(map.down, 0.0);
    }

    #[test]
    fn test_close_brick_keeps_direction_open() {
        let cfg = ArenaConfig::default();
        let mut env = env_with_eagle(0.0, 80.0);
        env.barriers.down = BarrierAhead {
            kind: ObstacleKind::Brick,
            length: 1.0,
        };
        let map = priority_map(&env, &cfg);
        assert_eq!(map.down, 4.0);
    }

    #[test]
    fn test_clearance_cutoff_is_four_field_units() {
        let cfg = ArenaConfig::default();
        let mut env = env_with_eagle(0.0, 0.0);
        env.barriers.left = BarrierAhead {
            kind: ObstacleKind::River,
            length: 4.0,
        };
        let map = priority_map(&env, &cfg);
        // Exactly 4 units of clearance is enough.
        assert_eq!(map.left, 2.0);

        env.barriers.left.length = 3.9;
        let map = priority_map(&env, &cfg);
        assert_eq!(map.left, 0.0);
    }

    #[test]
    fn test_sampler_returns_only_positive_weight() {
        let map = PriorityMap {
            up: 0.0,
            down: 1.0,
            left: 0.0,
            right: 0.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            assert_eq!(sample_direction(&map, &mut rng), Direction::Down);
        }
    }

    #[test]
    fn test_sampler_covers_positive_weights() {
        let map = PriorityMap {
            up: 2.0,
            down: 4.0,
            left: 0.0,
            right: 2.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [0u32; 4];
        for _ in 0..2000 {
            match sample_direction(&map, &mut rng) {
                Direction::Up => seen[0] += 1,
                Direction::Down => seen[1] += 1,
                Direction::Left => seen[2] += 1,
                Direction::Right => seen[3] += 1,
            }
        }
        assert!(seen[0] > 0);
        assert!(seen[1] > seen[0]);
        assert_eq!(seen[2], 0);
        assert!(seen[3] > 0);
    }
}
