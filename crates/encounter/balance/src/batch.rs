//! Many runs per agent, fanned out over blocking tasks.

use anyhow::Context;
use encounter_core::{SeedStream, derive_seed};
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::agent::AgentKind;
use crate::config::BalanceConfig;
use crate::report::{AgentSummary, BatchReport, RunResult};
use crate::runner;

/// Seed of the `index`-th encounter in a batch. Every agent faces the same
/// sequence of encounters.
pub fn run_seed(base: u64, index: u32) -> u64 {
    derive_seed(base, SeedStream::ENCOUNTER, u64::from(index))
}

/// Plays `config.runs` encounters with one agent kind.
pub fn run_series(config: &BalanceConfig, kind: AgentKind) -> Vec<RunResult> {
    (0..config.runs)
        .map(|index| {
            let seed = run_seed(config.seed, index);
            let mut agent = kind.build(derive_seed(seed, SeedStream::AGENT, 0));
            runner::run(
                agent.as_mut(),
                config.encounter(seed),
                config.enemy_mode,
                config.base_damage,
                seed,
            )
        })
        .collect()
}

/// Runs every configured agent and summarises each one.
///
/// Agent series run concurrently on the blocking pool; the report lists
/// agents in configuration order regardless of completion order.
pub async fn run_batch(config: &BalanceConfig) -> anyhow::Result<BatchReport> {
    config.validate()?;
    info!(
        runs = config.runs,
        seed = config.seed,
        agents = config.agents.len(),
        "starting batch"
    );

    let mut tasks = JoinSet::new();
    for (position, kind) in config.agents.iter().copied().enumerate() {
        let config = config.clone();
        tasks.spawn_blocking(move || {
            let results = run_series(&config, kind);
            (position, AgentSummary::from_results(kind, &results))
        });
    }

    let mut summaries = Vec::with_capacity(config.agents.len());
    while let Some(joined) = tasks.join_next().await {
        let (position, summary) = joined.context("agent series task failed")?;
        info!(
            agent = %summary.agent,
            destroyed = summary.destroyed,
            subjugated = summary.subjugated,
            hero_defeated = summary.hero_defeated,
            turn_limit = summary.turn_limit,
            mean_turns = summary.mean_turns,
            mean_entropy = summary.mean_entropy,
            "agent finished"
        );
        summaries.push((position, summary));
    }
    summaries.sort_by_key(|(position, _)| *position);

    let report = BatchReport {
        seed: config.seed,
        runs_per_agent: config.runs,
        agents: summaries.into_iter().map(|(_, summary)| summary).collect(),
    };
    for agent in report.degenerate_agents() {
        warn!(%agent, "degenerate strategy: low decision entropy with a high resolve rate");
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_is_reproducible() {
        let config = BalanceConfig {
            runs: 4,
            seed: 11,
            ..BalanceConfig::default()
        };
        let first = run_series(&config, AgentKind::Random);
        let second = run_series(&config, AgentKind::Random);
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn runs_get_distinct_seeds() {
        assert_ne!(run_seed(5, 0), run_seed(5, 1));
        assert_ne!(run_seed(5, 0), run_seed(6, 0));
    }
}
