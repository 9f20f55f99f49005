//! Fire-or-hold heuristic

use crate::config::ArenaConfig;
use crate::env::{Delta, TankEnv};
use crate::tank::{Direction, Tank};
use rand::Rng;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Fire probability when lined up with the eagle
const EAGLE_FIRE_P: f32 = 0.8;

/// Fire probability when lined up with the nearest human tank
const ENEMY_FIRE_P: f32 = 0.6;

/// Forward reach of the alignment bands, in blocks
const BAND_BLOCKS: f32 = 4.0;

/// Divisor applied to the ahead distance in the brick threshold
const BRICK_FALLOFF: f32 = 10.0;

// ============================================================================
// FIRE DECISION
// ============================================================================

/// Decide whether the tank fires this tick.
///
/// Three independent triggers, each with its own fresh draw; all three
/// are evaluated every call, then OR-ed:
///
/// 1. a destructible obstacle directly ahead, likelier the closer it is;
/// 2. lined up with the eagle (probability [`EAGLE_FIRE_P`]);
/// 3. lined up with the nearest human tank (probability
///    [`ENEMY_FIRE_P`]), only when one exists.
pub fn should_fire<R: Rng>(tank: &Tank, env: &TankEnv, cfg: &ArenaConfig, rng: &mut R) -> bool {
    let band = BAND_BLOCKS * cfg.block_size;

    // Brick ahead: threshold falls off linearly with distance, ~1 at
    // contact.
    let ahead = env.barriers.get(tank.direction);
    let brick_draw = rng.gen::<f32>();
    let brick_shot = ahead.kind.destructible()
        && brick_draw < 1.0 - ahead.length / BRICK_FALLOFF * cfg.block_size;

    // Facing the eagle inside the alignment band.
    let eagle_draw = rng.gen::<f32>();
    let eagle_shot =
        aligned(tank.direction, env.position.eagle, band) && eagle_draw < EAGLE_FIRE_P;

    // Facing the nearest human tank inside the alignment band.
    let enemy_shot = match env.position.nearest_human {
        Some(enemy) => {
            let enemy_draw = rng.gen::<f32>();
            aligned(tank.direction, enemy, band) && enemy_draw < ENEMY_FIRE_P
        }
        None => false,
    };

    brick_shot || eagle_shot || enemy_shot
}

/// Whether a target offset sits inside the facing's alignment band:
/// within 4 units laterally and within `band` forward on the facing
/// axis
fn aligned(direction: Direction, target: Delta, band: f32) -> bool {
    match direction {
        Direction::Left => target.dy <= 4.0 && -band <= target.dx && target.dx <= 0.0,
        Direction::Right => target.dy <= 4.0 && 0.0 <= target.dx && target.dx <= band,
        Direction::Down => target.dx <= 4.0 && 0.0 <= target.dy && target.dy <= band,
        Direction::Up => target.dx <= 4.0 && -band <= target.dy && target.dy <= 0.0,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{BarrierInfo, RelativePositions};
    use crate::scan::{BarrierAhead, ObstacleKind};
    use crate::tank::Side;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn tank_facing(direction: Direction) -> Tank {
        Tank::new(1, 96.0, 96.0, direction, Side::Bot)
    }

    fn quiet_env() -> TankEnv {
        let open = BarrierAhead {
            kind: ObstacleKind::Border,
            length: 100.0,
        };
        TankEnv {
            position: RelativePositions {
                // Far away on both axes, outside every band.
                eagle: Delta { dx: 100.0, dy: 100.0 },
                nearest_human: None,
            },
            barriers: BarrierInfo {
                up: open,
                down: open,
                left: open,
                right: open,
            },
        }
    }

    fn fire_rate(tank: &Tank, env: &TankEnv, trials: u32) -> f32 {
        let cfg = ArenaConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut fired = 0;
        for _ in 0..trials {
            if should_fire(tank, env, &cfg, &mut rng) {
                fired += 1;
            }
        }
        fired as f32 / trials as f32
    }

    #[test]
    fn test_brick_at_contact_always_fires() {
        let mut env = quiet_env();
        env.barriers.right = BarrierAhead {
            kind: ObstacleKind::Brick,
            length: 0.0,
        };
        let rate = fire_rate(&tank_facing(Direction::Right), &env, 300);
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn test_distant_brick_never_fires() {
        let mut env = quiet_env();
        env.barriers.right = BarrierAhead {
            kind: ObstacleKind::Brick,
            length: 160.0,
        };
        let rate = fire_rate(&tank_facing(Direction::Right), &env, 300);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_steel_ahead_never_triggers_brick_shot() {
        let mut env = quiet_env();
        env.barriers.right = BarrierAhead {
            kind: ObstacleKind::Steel,
            length: 0.0,
        };
        let rate = fire_rate(&tank_facing(Direction::Right), &env, 300);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_eagle_band_fires_at_eight_in_ten() {
        let mut env = quiet_env();
        // Eagle one block ahead on the +x axis, laterally in band.
        env.position.eagle = Delta { dx: 16.0, dy: 0.0 };
        let rate = fire_rate(&tank_facing(Direction::Right), &env, 2000);
        assert!((0.72..=0.88).contains(&rate), "rate {} out of range", rate);
    }

    #[test]
    fn test_eagle_band_up_variant() {
        let mut env = quiet_env();
        env.position.eagle = Delta { dx: 0.0, dy: -16.0 };
        let rate = fire_rate(&tank_facing(Direction::Up), &env, 2000);
        assert!((0.72..=0.88).contains(&rate), "rate {} out of range", rate);
    }

    #[test]
    fn test_eagle_behind_does_not_fire() {
        let mut env = quiet_env();
        // Eagle on +x, tank facing left: outside the left band.
        env.position.eagle = Delta { dx: 16.0, dy: 0.0 };
        let rate = fire_rate(&tank_facing(Direction::Left), &env, 300);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_enemy_band_fires_at_six_in_ten() {
        let mut env = quiet_env();
        env.position.nearest_human = Some(Delta { dx: 0.0, dy: 16.0 });
        let rate = fire_rate(&tank_facing(Direction::Down), &env, 2000);
        assert!((0.52..=0.68).contains(&rate), "rate {} out of range", rate);
    }

    #[test]
    fn test_no_enemy_means_no_enemy_shot() {
        let env = quiet_env();
        let rate = fire_rate(&tank_facing(Direction::Down), &env, 300);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_triggers_combine() {
        let mut env = quiet_env();
        env.barriers.down = BarrierAhead {
            kind: ObstacleKind::Brick,
            length: 0.0,
        };
        env.position.nearest_human = Some(Delta { dx: 0.0, dy: 16.0 });
        // Brick at contact alone guarantees the shot.
        let rate = fire_rate(&tank_facing(Direction::Down), &env, 300);
        assert_eq!(rate, 1.0);
    }
}
