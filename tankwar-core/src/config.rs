//! Arena tunables
//!
//! Every component takes the config as an explicit value; there is no
//! ambient global state.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tile size and grid dimension of one obstacle layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Side length of one cell, in field units
    pub tile: f32,
    /// Grid dimension (the layer is `n * n` cells, row-major)
    pub n: usize,
}

/// Field geometry and per-layer grid shapes
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Side length of the square field, in field units
    pub field_size: f32,
    /// Base tile: distances in the heuristics are expressed in blocks
    pub block_size: f32,
    /// Side length of a tank's hitbox
    pub tank_size: f32,
    pub brick: LayerSpec,
    pub steel: LayerSpec,
    pub river: LayerSpec,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        // Classic 13x13-block arena
        Self {
            field_size: 208.0,
            block_size: 16.0,
            tank_size: 16.0,
            brick: LayerSpec { tile: 4.0, n: 52 },
            steel: LayerSpec { tile: 8.0, n: 26 },
            river: LayerSpec { tile: 16.0, n: 13 },
        }
    }
}

impl ArenaConfig {
    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
