//! Offline balance tooling for `encounter-core`.
//!
//! Scripted agents play encounters against the enemy behavior selector; the
//! batch runner aggregates their results and flags strategies that win
//! without ever varying their play.
pub mod agent;
pub mod batch;
pub mod config;
pub mod report;
pub mod runner;

pub use agent::{Agent, AgentAction, AgentKind};
pub use batch::{run_batch, run_seed, run_series};
pub use config::BalanceConfig;
pub use report::{AgentSummary, BatchReport, RunOutcome, RunResult, decision_entropy};
pub use runner::{EncounterRun, MAX_ACTIONS_PER_TURN, MAX_TURNS, run};
