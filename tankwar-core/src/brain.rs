//! One-stop decision facade for drivers

use crate::config::ArenaConfig;
use crate::env::sense;
use crate::fire::should_fire;
use crate::level::Level;
use crate::priority::{priority_map, sample_direction};
use crate::tank::{Direction, Tank};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Outcome of one decision tick
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// `None` when every direction is shut (tank boxed in)
    pub direction: Option<Direction>,
    pub fire: bool,
}

/// Decision engine for one bot tank, owning its random stream
pub struct TankBrain {
    rng: ChaCha8Rng,
}

impl TankBrain {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Run the full sense -> score -> sample -> fire pipeline for one
    /// tick. Reads the level and roster only; never mutates them.
    pub fn decide(
        &mut self,
        level: &Level,
        tanks: &[Tank],
        tank: &Tank,
        cfg: &ArenaConfig,
    ) -> Decision {
        let env = sense(level, tanks, tank, cfg);
        let priorities = priority_map(&env, cfg);
        let direction = if priorities.total() > 0.0 {
            Some(sample_direction(&priorities, &mut self.rng))
        } else {
            None
        };
        let fire = should_fire(tank, &env, cfg, &mut self.rng);
        Decision { direction, fire }
    }
}

impl Default for TankBrain {
    fn default() -> Self {
        Self::new()
    }
}
