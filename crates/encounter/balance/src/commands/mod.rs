//! CLI subcommands, one struct per command with an `execute` method.

mod batch;
mod run;
mod snapshot;

pub use batch::Batch;
pub use run::Run;
pub use snapshot::Snapshot;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use encounter_balance::BalanceConfig;
use encounter_core::EnemyMode;

/// Flags shared by every command, applied over the config file and
/// environment.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// TOML config file (defaults are used when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base seed
    #[arg(long)]
    seed: Option<u64>,

    /// Enemy behavior mode (aggressive, defensive, cunning, dynamic)
    #[arg(long, value_name = "MODE")]
    enemy_mode: Option<EnemyMode>,

    /// Enemy attack damage
    #[arg(long)]
    base_damage: Option<u32>,
}

impl ConfigArgs {
    pub fn resolve(&self) -> Result<BalanceConfig> {
        let mut config = BalanceConfig::resolve(self.config.as_deref())?;
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(mode) = self.enemy_mode {
            config.enemy_mode = mode;
        }
        if let Some(damage) = self.base_damage {
            config.base_damage = damage;
        }
        Ok(config)
    }
}
