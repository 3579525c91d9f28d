use anyhow::{Context, Result};
use clap::Parser;
use encounter_balance::{AgentKind, run};
use encounter_core::{SeedStream, derive_seed};

use super::ConfigArgs;

/// Play one encounter and print its result as JSON
#[derive(Parser)]
pub struct Run {
    #[command(flatten)]
    config: ConfigArgs,

    /// Strategy playing the hero
    #[arg(short, long, value_enum, default_value = "adaptive")]
    agent: AgentKind,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let config = self.config.resolve()?;
        let mut agent = self
            .agent
            .build(derive_seed(config.seed, SeedStream::AGENT, 0));

        let result = run(
            agent.as_mut(),
            config.encounter(config.seed),
            config.enemy_mode,
            config.base_damage,
            config.seed,
        );

        let json = serde_json::to_string_pretty(&result).context("Failed to encode run result")?;
        println!("{json}");
        Ok(())
    }
}
