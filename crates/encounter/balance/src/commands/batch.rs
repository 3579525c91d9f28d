use anyhow::{Context, Result};
use clap::Parser;
use encounter_balance::{AgentKind, run_batch};

use super::ConfigArgs;

/// Play many encounters per agent and summarise them
#[derive(Parser)]
pub struct Batch {
    #[command(flatten)]
    config: ConfigArgs,

    /// Encounters per agent
    #[arg(short, long)]
    runs: Option<u32>,

    /// Restrict the batch to these agents (repeatable)
    #[arg(short, long = "agent", value_enum, value_name = "AGENT")]
    agents: Vec<AgentKind>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Fixed-width table, one row per agent
    Table,
    /// Full JSON report
    Json,
}

impl Batch {
    pub async fn execute(self) -> Result<()> {
        let mut config = self.config.resolve()?;
        if let Some(runs) = self.runs {
            config.runs = runs;
        }
        if !self.agents.is_empty() {
            config.agents = self.agents;
        }

        let report = run_batch(&config).await?;

        match self.format {
            OutputFormat::Table => print!("{}", report.render_table()),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to encode batch report")?;
                println!("{json}");
            }
        }
        Ok(())
    }
}
