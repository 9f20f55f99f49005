//! Scenario: a level plus the tanks standing on it

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tankwar_core::{ArenaConfig, Direction, Level, Side, Tank};

/// A level together with its tank roster
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    pub level: Level,
    pub tanks: Vec<Tank>,
}

impl Scenario {
    pub fn load(path: &Path, cfg: &ArenaConfig) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario: {}", path.display()))?;
        let scenario: Scenario = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse scenario: {}", path.display()))?;
        scenario.level.validate(cfg)?;
        Ok(scenario)
    }

    /// Built-in demo: three bots on the top row, one human defender
    /// near the eagle
    pub fn demo(cfg: &ArenaConfig) -> Self {
        let level = Level::demo(cfg);
        let right = cfg.field_size - cfg.tank_size;
        let bottom = cfg.field_size - cfg.tank_size;
        let tanks = vec![
            Tank::new(1, 0.0, 0.0, Direction::Down, Side::Bot),
            Tank::new(2, right / 2.0, 0.0, Direction::Down, Side::Bot),
            Tank::new(3, right, 0.0, Direction::Down, Side::Bot),
            Tank::new(4, 64.0, bottom, Direction::Up, Side::Human),
        ];
        Self { level, tanks }
    }
}

/// Arena config from file, or the classic arena when omitted
pub fn load_config(path: &Option<PathBuf>) -> Result<ArenaConfig> {
    match path {
        Some(p) => {
            ArenaConfig::load(p).with_context(|| format!("Failed to load config: {}", p.display()))
        }
        None => Ok(ArenaConfig::default()),
    }
}

/// Scenario from file, or the built-in demo when omitted
pub fn load_scenario(path: &Option<PathBuf>, cfg: &ArenaConfig) -> Result<Scenario> {
    match path {
        Some(p) => Scenario::load(p, cfg),
        None => Ok(Scenario::demo(cfg)),
    }
}
