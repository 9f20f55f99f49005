//! Decide command - one decision tick for every bot tank
//!
//! ## Architecture (3-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: decide_all(), report()
//! - Level 3: formatting utilities

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tankwar_core::{ArenaConfig, Decision, Side, TankBrain};

use crate::scenario::{load_config, load_scenario, Scenario};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct DecideArgs {
    /// Scenario JSON file (built-in demo when omitted)
    #[arg(long, value_name = "FILE")]
    pub scenario: Option<PathBuf>,

    /// Arena config JSON file (classic arena when omitted)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output decisions as JSON
    #[arg(long)]
    pub json: bool,
}

/// One tank's decision for the tick
#[derive(Clone, Copy, Debug, Serialize)]
struct DecisionRecord {
    id: u32,
    x: f32,
    y: f32,
    decision: Decision,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run decide command
///
/// 1. Load config and scenario
/// 2. Decide for every bot tank
/// 3. Report decisions
pub fn run(args: DecideArgs, seed: Option<u64>) -> Result<()> {
    let cfg = load_config(&args.config)?;
    let scenario = load_scenario(&args.scenario, &cfg)?;

    let bots = scenario
        .tanks
        .iter()
        .filter(|t| t.side == Side::Bot)
        .count();
    tracing::info!("Deciding for {} bot tanks (seed={:?})", bots, seed);

    let records = decide_all(&scenario, &cfg, seed);
    report(&records, args.json);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// One decision per bot tank, each from its own seeded brain
fn decide_all(scenario: &Scenario, cfg: &ArenaConfig, seed: Option<u64>) -> Vec<DecisionRecord> {
    let base = seed.unwrap_or(42);
    let mut records = Vec::new();
    for tank in scenario.tanks.iter().filter(|t| t.side == Side::Bot) {
        let mut brain = TankBrain::with_seed(base.wrapping_add(u64::from(tank.id)));
        let decision = brain.decide(&scenario.level, &scenario.tanks, tank, cfg);
        records.push(DecisionRecord {
            id: tank.id,
            x: tank.x,
            y: tank.y,
            decision,
        });
    }
    records
}

fn report(records: &[DecisionRecord], json: bool) {
    if json {
        if let Ok(out) = serde_json::to_string_pretty(records) {
            println!("{}", out);
        }
    } else {
        for record in records {
            println!(
                "tank {:>3} at ({:>5.1}, {:>5.1})  move: {}  fire: {}",
                record.id,
                record.x,
                record.y,
                format_direction(record.decision.direction),
                record.decision.fire,
            );
        }
    }
}

// ============================================================================
// LEVEL 3 - FORMATTING
// ============================================================================

fn format_direction(direction: Option<tankwar_core::Direction>) -> &'static str {
    match direction {
        Some(tankwar_core::Direction::Up) => "up",
        Some(tankwar_core::Direction::Down) => "down",
        Some(tankwar_core::Direction::Left) => "left",
        Some(tankwar_core::Direction::Right) => "right",
        None => "boxed in",
    }
}
