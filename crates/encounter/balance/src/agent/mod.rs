//! Decision strategies that play an encounter on the hero's side.
//!
//! Agents only look at the simulation; the runner applies whatever they pick
//! and counts rejections.
mod strategies;

pub use strategies::{
    AdaptiveAgent, GreedyInfluenceAgent, GreedyStrikeAgent, RandomAgent, SacrificeBiasedAgent,
};

use encounter_core::{ActionType, CardId, CombatSimulation};

/// One player micro-action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentAction {
    Strike(CardId),
    Influence(CardId),
    Sacrifice(CardId),
    EndTurn,
}

/// A hero-side strategy.
pub trait Agent: Send {
    fn name(&self) -> &'static str;

    fn select_action(&mut self, simulation: &CombatSimulation) -> AgentAction;
}

/// The reference strategies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum AgentKind {
    Random,
    GreedyStrike,
    GreedyInfluence,
    Adaptive,
    SacrificeBiased,
}

impl AgentKind {
    /// Builds a fresh agent. Only the random agent reads the seed.
    pub fn build(self, seed: u64) -> Box<dyn Agent> {
        match self {
            Self::Random => Box::new(RandomAgent::new(seed)),
            Self::GreedyStrike => Box::new(GreedyStrikeAgent),
            Self::GreedyInfluence => Box::new(GreedyInfluenceAgent),
            Self::Adaptive => Box::new(AdaptiveAgent),
            Self::SacrificeBiased => Box::new(SacrificeBiasedAgent),
        }
    }
}

/// Playable card with the highest previewed power for `action`.
///
/// Ties go to the cheaper card, then to hand order.
pub(crate) fn best_card(simulation: &CombatSimulation, action: ActionType) -> Option<CardId> {
    simulation
        .playable_cards()
        .filter_map(|card| {
            let power = simulation.preview_power(card.id, action)?;
            let cost = simulation.playable_cost(card.id)?;
            Some((card.id, power, cost))
        })
        .fold(None, |best: Option<(CardId, u32, u32)>, candidate| match best {
            Some((_, power, cost))
                if power > candidate.1 || (power == candidate.1 && cost <= candidate.2) =>
            {
                best
            }
            _ => Some(candidate),
        })
        .map(|(id, _, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn kinds_parse_from_kebab_case() {
        assert_eq!("greedy-strike".parse::<AgentKind>(), Ok(AgentKind::GreedyStrike));
        assert_eq!(AgentKind::SacrificeBiased.to_string(), "sacrifice-biased");
    }

    #[test]
    fn every_kind_builds_a_named_agent() {
        let names: Vec<&str> = AgentKind::iter().map(|kind| kind.build(1).name()).collect();
        assert_eq!(
            names,
            vec![
                "random",
                "greedy-strike",
                "greedy-influence",
                "adaptive",
                "sacrifice-biased"
            ]
        );
    }
}
