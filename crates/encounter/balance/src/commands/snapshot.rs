use anyhow::{Context, Result};
use clap::Parser;
use encounter_balance::{AgentKind, EncounterRun};
use encounter_core::{SeedStream, derive_seed};
use tracing::info;

use super::ConfigArgs;

/// Play a few turns and print the encounter snapshot
#[derive(Parser)]
pub struct Snapshot {
    #[command(flatten)]
    config: ConfigArgs,

    /// Player turns to play before capturing
    #[arg(short, long, default_value_t = 3)]
    turns: u32,

    /// Strategy playing the hero
    #[arg(short, long, value_enum, default_value = "random")]
    agent: AgentKind,

    /// Print only the digest
    #[arg(long)]
    digest_only: bool,
}

impl Snapshot {
    pub fn execute(self) -> Result<()> {
        let config = self.config.resolve()?;
        let mut agent = self
            .agent
            .build(derive_seed(config.seed, SeedStream::AGENT, 0));
        let mut encounter = EncounterRun::new(
            config.encounter(config.seed),
            config.enemy_mode,
            config.base_damage,
            config.seed,
        );
        for _ in 0..self.turns {
            if !encounter.play_turn(agent.as_mut()) {
                break;
            }
        }

        let snapshot = encounter.simulation().capture();
        let digest = snapshot.digest().context("Failed to hash snapshot")?;
        info!(
            turns = encounter.turns_played(),
            disposition = snapshot.state.disposition,
            "captured snapshot"
        );

        println!("digest: {}", hex::encode(digest));
        if !self.digest_only {
            let json =
                serde_json::to_string_pretty(&snapshot).context("Failed to encode snapshot")?;
            println!("{json}");
        }
        Ok(())
    }
}
