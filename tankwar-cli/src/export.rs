//! Export command - write the built-in demo assets to disk

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tankwar_core::ArenaConfig;

use crate::scenario::Scenario;

#[derive(Args)]
pub struct ExportArgs {
    /// Where to write the demo scenario JSON
    #[arg(long, value_name = "FILE", default_value = "demo-scenario.json")]
    pub scenario: PathBuf,

    /// Also write the demo level on its own
    #[arg(long, value_name = "FILE")]
    pub level: Option<PathBuf>,

    /// Also write the classic arena config
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let cfg = ArenaConfig::default();
    let scenario = Scenario::demo(&cfg);

    let content = serde_json::to_string_pretty(&scenario)?;
    std::fs::write(&args.scenario, content)
        .with_context(|| format!("Failed to write scenario: {}", args.scenario.display()))?;
    tracing::info!("Wrote demo scenario to {}", args.scenario.display());

    if let Some(path) = &args.level {
        scenario.level.save(path)?;
        tracing::info!("Wrote demo level to {}", path.display());
    }

    if let Some(path) = &args.config {
        cfg.save(path)?;
        tracing::info!("Wrote arena config to {}", path.display());
    }

    Ok(())
}
