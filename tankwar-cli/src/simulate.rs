//! Simulate command - repeated decision ticks with naive movement
//!
//! The stepper is a driver, not a collision engine: a tank advances
//! along its chosen direction only when the sensed clearance covers the
//! step, and stays put otherwise.
//!
//! ## Architecture (3-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: run_simulation(), report()
//! - Level 3: step_tank()

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rustc_hash::FxHashMap;
use serde::Serialize;

use tankwar_core::{look_ahead, ArenaConfig, Decision, Level, Side, Tank, TankBrain};

use crate::scenario::{load_config, load_scenario, Scenario};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Scenario JSON file (built-in demo when omitted)
    #[arg(long, value_name = "FILE")]
    pub scenario: Option<PathBuf>,

    /// Arena config JSON file (classic arena when omitted)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of ticks to run
    #[arg(long, default_value = "20")]
    pub ticks: u32,

    /// Field units a tank advances per tick
    #[arg(long, default_value = "4")]
    pub speed: f32,

    /// Output the trace as JSON
    #[arg(long)]
    pub json: bool,
}

/// One bot tank's decision and movement for one tick
#[derive(Clone, Copy, Debug, Serialize)]
struct TickRecord {
    tick: u32,
    id: u32,
    x: f32,
    y: f32,
    decision: Decision,
    moved: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Load config and scenario
/// 2. Tick the bots forward
/// 3. Report the trace
pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    let cfg = load_config(&args.config)?;
    let scenario = load_scenario(&args.scenario, &cfg)?;

    tracing::info!(
        "Simulating {} ticks at speed {} (seed={:?})",
        args.ticks,
        args.speed,
        seed
    );

    let trace = run_simulation(&scenario, &cfg, &args, seed);
    report(&trace, args.json);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Tick every bot tank forward `ticks` times.
///
/// Decisions within one tick all read the same roster snapshot taken
/// at the start of the tick; movement lands in the registry afterwards.
fn run_simulation(
    scenario: &Scenario,
    cfg: &ArenaConfig,
    args: &SimulateArgs,
    seed: Option<u64>,
) -> Vec<TickRecord> {
    let base = seed.unwrap_or(42);

    let mut registry: FxHashMap<u32, Tank> =
        scenario.tanks.iter().map(|t| (t.id, *t)).collect();
    let mut bot_ids: Vec<u32> = scenario
        .tanks
        .iter()
        .filter(|t| t.side == Side::Bot)
        .map(|t| t.id)
        .collect();
    bot_ids.sort_unstable();
    let mut brains: FxHashMap<u32, TankBrain> = bot_ids
        .iter()
        .map(|&id| (id, TankBrain::with_seed(base.wrapping_add(u64::from(id)))))
        .collect();

    let mut trace = Vec::new();
    for tick in 0..args.ticks {
        let mut roster: Vec<Tank> = registry.values().copied().collect();
        roster.sort_unstable_by_key(|t| t.id);

        for &id in &bot_ids {
            let tank = registry[&id];
            let Some(brain) = brains.get_mut(&id) else {
                continue;
            };
            let decision = brain.decide(&scenario.level, &roster, &tank, cfg);
            let (next, moved) = step_tank(&tank, decision, &scenario.level, cfg, args.speed);

            tracing::debug!(
                "tick {:>3}: tank {} at ({:.1}, {:.1}) -> {:?} fire={} moved={}",
                tick,
                id,
                tank.x,
                tank.y,
                decision.direction,
                decision.fire,
                moved
            );

            trace.push(TickRecord {
                tick,
                id,
                x: next.x,
                y: next.y,
                decision,
                moved,
            });
            registry.insert(id, next);
        }
    }
    trace
}

fn report(trace: &[TickRecord], json: bool) {
    if json {
        if let Ok(out) = serde_json::to_string_pretty(trace) {
            println!("{}", out);
        }
        return;
    }

    let shots = trace.iter().filter(|r| r.decision.fire).count();
    let moves = trace.iter().filter(|r| r.moved).count();
    println!("{} records, {} moves, {} shots", trace.len(), moves, shots);
    for record in trace.iter().rev().take(8).rev() {
        println!(
            "tick {:>3}: tank {} at ({:>5.1}, {:>5.1}) fire={}",
            record.tick, record.id, record.x, record.y, record.decision.fire
        );
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Turn the tank to its chosen direction and advance it when the sensed
/// clearance covers the step
fn step_tank(
    tank: &Tank,
    decision: Decision,
    level: &Level,
    cfg: &ArenaConfig,
    speed: f32,
) -> (Tank, bool) {
    let Some(direction) = decision.direction else {
        return (*tank, false);
    };

    let mut next = tank.facing(direction);
    let ahead = look_ahead(level, &next, cfg);
    if ahead.length < speed {
        return (next, false);
    }

    let (dx, dy) = direction.delta();
    next.x += dx * speed;
    next.y += dy * speed;
    (next, true)
}
