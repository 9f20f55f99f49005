//! Obstacle scanning along a facing axis
//!
//! Each obstacle layer is marched independently, one of its own tiles
//! per step, until the projected hitbox either leaves the field or
//! overlaps an occupied cell. [`look_ahead`] merges the three layers
//! into the single nearest relevant obstacle.

use crate::config::{ArenaConfig, LayerSpec};
use crate::level::Level;
use crate::tank::{Direction, Tank};
use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Inward hitbox inset per side, as a fraction of a block; keeps cells
/// the tank merely touches edge-to-edge out of the overlap set
const HITBOX_INSET: f32 = 0.02;

// ============================================================================
// TYPES
// ============================================================================

/// What a directional scan ran into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Border,
    Steel,
    River,
    Brick,
}

impl ObstacleKind {
    /// Only brick can be shot away
    pub fn destructible(self) -> bool {
        matches!(self, ObstacleKind::Brick)
    }
}

/// Nearest obstacle along one facing
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarrierAhead {
    pub kind: ObstacleKind,
    /// Distance from the tank's leading edge to the obstacle edge, in
    /// field units; never negative
    pub length: f32,
}

/// Axis-aligned box in field coordinates
#[derive(Clone, Copy, Debug)]
struct Rect {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

// ============================================================================
// SINGLE-LAYER MARCH
// ============================================================================

/// Tank hitbox advanced by `advance` along its facing, shrunk inward by
/// `inset` on every side
fn hitbox(tank: &Tank, advance: f32, size: f32, inset: f32) -> Rect {
    let (dx, dy) = tank.direction.delta();
    Rect {
        x: tank.x + dx * advance + inset,
        y: tank.y + dy * advance + inset,
        w: size - 2.0 * inset,
        h: size - 2.0 * inset,
    }
}

/// Inclusive `(rows, cols)` ranges of layer cells overlapping `rect`,
/// clamped to the grid; `None` when the rect lies wholly outside
fn overlapped_cells(rect: Rect, layer: LayerSpec) -> Option<((usize, usize), (usize, usize))> {
    let last = layer.n as isize - 1;
    let row1 = ((rect.y / layer.tile).floor() as isize).max(0);
    let row2 = (((rect.y + rect.h) / layer.tile).floor() as isize).min(last);
    let col1 = ((rect.x / layer.tile).floor() as isize).max(0);
    let col2 = (((rect.x + rect.w) / layer.tile).floor() as isize).min(last);
    if row1 > row2 || col1 > col2 {
        return None;
    }
    Some(((row1 as usize, row2 as usize), (col1 as usize, col2 as usize)))
}

/// Distance from the tank's leading edge to the nearest occupied cell of
/// one layer along the facing axis, or infinity once the projected
/// hitbox leaves the field. The grid is finite, so the march terminates.
fn ahead_distance(cells: &[bool], layer: LayerSpec, tank: &Tank, cfg: &ArenaConfig) -> f32 {
    let inset = HITBOX_INSET * cfg.block_size;
    let mut step = 1u32;
    loop {
        let rect = hitbox(tank, step as f32 * layer.tile, cfg.tank_size, inset);
        let Some(((row1, row2), (col1, col2))) = overlapped_cells(rect, layer) else {
            return f32::INFINITY;
        };
        for row in row1..=row2 {
            for col in col1..=col2 {
                if cells[row * layer.n + col] {
                    return (step - 1) as f32 * layer.tile;
                }
            }
        }
        step += 1;
    }
}

// ============================================================================
// LAYER MERGE
// ============================================================================

/// Nearest relevant obstacle in the tank's facing direction.
///
/// Steel wins distance ties against both other layers, river wins ties
/// against brick; with nothing on any layer the field border is
/// reported with the exact distance from the tank's position.
pub fn look_ahead(level: &Level, tank: &Tank, cfg: &ArenaConfig) -> BarrierAhead {
    let brick = ahead_distance(&level.bricks, cfg.brick, tank, cfg);
    let steel = ahead_distance(&level.steels, cfg.steel, tank, cfg);
    let river = ahead_distance(&level.rivers, cfg.river, tank, cfg);

    if steel.is_infinite() && brick.is_infinite() && river.is_infinite() {
        let length = match tank.direction {
            Direction::Up => tank.y,
            Direction::Down => cfg.field_size - tank.y - cfg.tank_size,
            Direction::Left => tank.x,
            Direction::Right => cfg.field_size - tank.x - cfg.tank_size,
        };
        BarrierAhead {
            kind: ObstacleKind::Border,
            length,
        }
    } else if steel <= brick && steel <= river {
        BarrierAhead {
            kind: ObstacleKind::Steel,
            length: steel,
        }
    } else if river <= brick {
        BarrierAhead {
            kind: ObstacleKind::River,
            length: river,
        }
    } else {
        BarrierAhead {
            kind: ObstacleKind::Brick,
            length: brick,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
