//! Level data: eagle position and the three obstacle layers
//!
//! Layers are row-major boolean grids (`row * n + col`), one per obstacle
//! type, each with its own tile size from [`ArenaConfig`]. The level is
//! read-only during a decision pass.

use crate::config::ArenaConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// The stationary base tanks defend or attack, in field coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Eagle {
    pub x: f32,
    pub y: f32,
}

/// One arena: eagle plus brick/steel/river occupancy grids
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub eagle: Eagle,
    pub bricks: Vec<bool>,
    pub steels: Vec<bool>,
    pub rivers: Vec<bool>,
}

/// Structural problems in level data
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("{layer} layer has {got} cells, expected {want}")]
    GridSize {
        layer: &'static str,
        got: usize,
        want: usize,
    },
    #[error("eagle at ({x}, {y}) is outside the {field}-unit field")]
    EagleOutOfField { x: f32, y: f32, field: f32 },
}

impl Level {
    /// Level with no obstacles and the eagle at the bottom center
    pub fn empty(cfg: &ArenaConfig) -> Self {
        Self {
            eagle: Eagle {
                x: (cfg.field_size - cfg.block_size) / 2.0,
                y: cfg.field_size - cfg.block_size,
            },
            bricks: vec![false; cfg.brick.n * cfg.brick.n],
            steels: vec![false; cfg.steel.n * cfg.steel.n],
            rivers: vec![false; cfg.river.n * cfg.river.n],
        }
    }

    pub fn set_brick(&mut self, cfg: &ArenaConfig, row: usize, col: usize) {
        self.bricks[row * cfg.brick.n + col] = true;
    }

    pub fn set_steel(&mut self, cfg: &ArenaConfig, row: usize, col: usize) {
        self.steels[row * cfg.steel.n + col] = true;
    }

    pub fn set_river(&mut self, cfg: &ArenaConfig, row: usize, col: usize) {
        self.rivers[row * cfg.river.n + col] = true;
    }

    /// Check grid shapes and eagle position against the config
    pub fn validate(&self, cfg: &ArenaConfig) -> Result<(), LevelError> {
        let checks = [
            ("brick", self.bricks.len(), cfg.brick.n * cfg.brick.n),
            ("steel", self.steels.len(), cfg.steel.n * cfg.steel.n),
            ("river", self.rivers.len(), cfg.river.n * cfg.river.n),
        ];
        for (layer, got, want) in checks {
            if got != want {
                return Err(LevelError::GridSize { layer, got, want });
            }
        }
        let max = cfg.field_size - cfg.block_size;
        if !(0.0..=max).contains(&self.eagle.x) || !(0.0..=max).contains(&self.eagle.y) {
            return Err(LevelError::EagleOutOfField {
                x: self.eagle.x,
                y: self.eagle.y,
                field: cfg.field_size,
            });
        }
        Ok(())
    }

    /// Load from a JSON file and validate against the config
    pub fn load(path: &Path, cfg: &ArenaConfig) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let level: Level = serde_json::from_str(&content)?;
        level.validate(cfg)?;
        Ok(level)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Built-in demo arena: brick pocket around the eagle, two brick
    /// walls up the field, steel posts on the flanks, a river strip in
    /// the top-left corner.
    pub fn demo(cfg: &ArenaConfig) -> Self {
        let mut level = Self::empty(cfg);

        // Brick pocket: left, top and right of the eagle block (block
        // col 6, row 12 -> brick cells at 4 per block).
        for row in 48..52 {
            for col in 20..24 {
                level.set_brick(cfg, row, col);
            }
            for col in 28..32 {
                level.set_brick(cfg, row, col);
            }
        }
        for row in 44..48 {
            for col in 20..32 {
                level.set_brick(cfg, row, col);
            }
        }

        // Two vertical brick walls (block cols 2 and 10, rows 4-8)
        for row in 16..36 {
            for col in 8..12 {
                level.set_brick(cfg, row, col);
            }
            for col in 40..44 {
                level.set_brick(cfg, row, col);
            }
        }

        // Steel posts at block (3, 6) and (9, 6)
        for row in 12..14 {
            for col in 6..8 {
                level.set_steel(cfg, row, col);
            }
            for col in 18..20 {
                level.set_steel(cfg, row, col);
            }
        }

        // River strip along the top-left corner
        for col in 0..3 {
            level.set_river(cfg, 3, col);
        }

        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matches_config() {
        let cfg = ArenaConfig::default();
        let level = Level::empty(&cfg);
        assert!(level.validate(&cfg).is_ok());
        assert!(!level.bricks.iter().any(|&b| b));
    }

    #[test]
    fn test_demo_validates() {
        let cfg = ArenaConfig::default();
        let level = Level::demo(&cfg);
        assert!(level.validate(&cfg).is_ok());
        assert!(level.bricks.iter().any(|&b| b));
        assert!(level.steels.iter().any(|&s| s));
        assert!(level.rivers.iter().any(|&r| r));
    }

    #[test]
    fn test_validate_rejects_bad_grid() {
        let cfg = ArenaConfig::default();
        let mut level = Level::empty(&cfg);
        level.steels.pop();
        match level.validate(&cfg) {
            Err(LevelError::GridSize { layer, .. }) => assert_eq!(layer, "steel"),
            other => panic!("expected GridSize error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_stray_eagle() {
        let cfg = ArenaConfig::default();
        let mut level = Level::empty(&cfg);
        level.eagle.x = cfg.field_size + 1.0;
        assert!(matches!(
            level.validate(&cfg),
            Err(LevelError::EagleOutOfField { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = ArenaConfig::default();
        let level = Level::demo(&cfg);
        let json = serde_json::to_string(&level).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);
    }
}
