//! TANKWAR Core - Bot tank decision engine
//!
//! This crate provides the per-tick decision logic for bot tanks:
//! - Obstacle scanning (multi-layer grid ray-march)
//! - Environment sensing (eagle / enemy offsets, barrier distances)
//! - Movement priorities and weighted direction sampling
//! - Fire-or-hold heuristic

pub mod config;
pub mod tank;
pub mod level;
pub mod scan;
pub mod env;
pub mod priority;
pub mod fire;
pub mod brain;

// Re-exports for convenient access
pub use config::{ArenaConfig, LayerSpec};
pub use tank::{Direction, Side, Tank, DIRECTIONS};
pub use level::{Eagle, Level, LevelError};
pub use scan::{look_ahead, BarrierAhead, ObstacleKind};
pub use env::{sense, BarrierInfo, Delta, RelativePositions, TankEnv};
pub use priority::{priority_map, sample_direction, PriorityMap};
pub use fire::should_fire;
pub use brain::{Decision, TankBrain};
