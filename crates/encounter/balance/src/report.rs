//! Run results and batch aggregation.

use std::fmt::Write as _;

use encounter_core::ActionCounts;
use serde::{Deserialize, Serialize};

use crate::agent::AgentKind;

/// How a single run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RunOutcome {
    Destroyed,
    Subjugated,
    HeroDefeated,
    TurnLimit,
}

impl RunOutcome {
    /// True when the disposition track reached a bound.
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Destroyed | Self::Subjugated)
    }
}

/// Everything one run produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub agent: String,
    pub seed: u64,
    pub outcome: RunOutcome,
    pub final_disposition: i32,
    pub turns_played: u32,
    pub hero_hp_remaining: u32,
    pub cards_exhausted: usize,
    pub strike_count: u32,
    pub influence_count: u32,
    pub sacrifice_count: u32,
    pub echo_count: u32,
    /// Shannon entropy in bits over the strike/influence/sacrifice counts.
    pub decision_entropy: f64,
    pub rejected_actions: u32,
}

/// Shannon entropy, in bits, of a distribution given as raw counts.
///
/// Returns 0 when there is nothing to measure.
pub fn decision_entropy(counts: &[u32]) -> f64 {
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = f64::from(total);
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

pub(crate) fn entropy_of(counts: &ActionCounts) -> f64 {
    decision_entropy(&counts.by_type())
}

/// Aggregated results of one agent across a batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub agent: AgentKind,
    pub runs: usize,
    pub destroyed: usize,
    pub subjugated: usize,
    pub hero_defeated: usize,
    pub turn_limit: usize,
    pub mean_turns: f64,
    pub mean_final_disposition: f64,
    pub mean_hero_hp: f64,
    pub mean_entropy: f64,
    pub rejected_actions: u64,
    /// Low decision diversity while still resolving nearly every run.
    pub degenerate: bool,
}

impl AgentSummary {
    /// Mean entropy below which a strategy counts as one-note.
    pub const DEGENERATE_ENTROPY: f64 = 0.5;
    /// Share of resolved runs above which a one-note strategy is a problem.
    pub const DEGENERATE_RESOLVE_RATE: f64 = 0.9;

    pub fn from_results(agent: AgentKind, results: &[RunResult]) -> Self {
        let runs = results.len();
        let count = |outcome: RunOutcome| results.iter().filter(|r| r.outcome == outcome).count();
        let mean = |value: fn(&RunResult) -> f64| {
            if runs == 0 {
                0.0
            } else {
                results.iter().map(value).sum::<f64>() / runs as f64
            }
        };

        let destroyed = count(RunOutcome::Destroyed);
        let subjugated = count(RunOutcome::Subjugated);
        let mean_entropy = mean(|r| r.decision_entropy);
        let resolve_rate = if runs == 0 {
            0.0
        } else {
            (destroyed + subjugated) as f64 / runs as f64
        };

        Self {
            agent,
            runs,
            destroyed,
            subjugated,
            hero_defeated: count(RunOutcome::HeroDefeated),
            turn_limit: count(RunOutcome::TurnLimit),
            mean_turns: mean(|r| f64::from(r.turns_played)),
            mean_final_disposition: mean(|r| f64::from(r.final_disposition)),
            mean_hero_hp: mean(|r| f64::from(r.hero_hp_remaining)),
            mean_entropy,
            rejected_actions: results.iter().map(|r| u64::from(r.rejected_actions)).sum(),
            degenerate: runs > 0
                && mean_entropy < Self::DEGENERATE_ENTROPY
                && resolve_rate >= Self::DEGENERATE_RESOLVE_RATE,
        }
    }
}

/// Result of a whole batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub seed: u64,
    pub runs_per_agent: u32,
    pub agents: Vec<AgentSummary>,
}

impl BatchReport {
    /// Agents flagged as degenerate.
    pub fn degenerate_agents(&self) -> impl Iterator<Item = AgentKind> + '_ {
        self.agents
            .iter()
            .filter(|summary| summary.degenerate)
            .map(|summary| summary.agent)
    }

    /// Fixed-width text table, one row per agent.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<18} {:>5} {:>6} {:>6} {:>6} {:>6} {:>7} {:>8} {:>7} {:>7}",
            "agent", "runs", "destr", "subj", "dead", "limit", "turns", "disp", "hp", "entropy"
        );
        for s in &self.agents {
            let flag = if s.degenerate { "  degenerate" } else { "" };
            let _ = writeln!(
                out,
                "{:<18} {:>5} {:>6} {:>6} {:>6} {:>6} {:>7.2} {:>8.2} {:>7.2} {:>7.3}{}",
                s.agent.to_string(),
                s.runs,
                s.destroyed,
                s.subjugated,
                s.hero_defeated,
                s.turn_limit,
                s.mean_turns,
                s.mean_final_disposition,
                s.mean_hero_hp,
                s.mean_entropy,
                flag
            );
        }
        out
    }
}
