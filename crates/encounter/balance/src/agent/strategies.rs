use encounter_core::{ActionType, CombatSimulation, DeterministicRng};

use super::{Agent, AgentAction, best_card};

/// Picks uniformly among every action the simulation would accept, including
/// ending the turn.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: DeterministicRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DeterministicRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_action(&mut self, simulation: &CombatSimulation) -> AgentAction {
        let mut options = vec![AgentAction::EndTurn];
        for card in simulation.playable_cards() {
            options.push(AgentAction::Strike(card.id));
            options.push(AgentAction::Influence(card.id));
        }
        if simulation.can_sacrifice() {
            options.extend(simulation.hand().iter().map(|card| AgentAction::Sacrifice(card.id)));
        }

        self.rng
            .pick_index(options.len())
            .map_or(AgentAction::EndTurn, |index| options[index])
    }
}

/// Always strikes with the strongest playable card.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrikeAgent;

impl Agent for GreedyStrikeAgent {
    fn name(&self) -> &'static str {
        "greedy-strike"
    }

    fn select_action(&mut self, simulation: &CombatSimulation) -> AgentAction {
        best_card(simulation, ActionType::Strike).map_or(AgentAction::EndTurn, AgentAction::Strike)
    }
}

/// Always influences with the strongest playable card.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyInfluenceAgent;

impl Agent for GreedyInfluenceAgent {
    fn name(&self) -> &'static str {
        "greedy-influence"
    }

    fn select_action(&mut self, simulation: &CombatSimulation) -> AgentAction {
        best_card(simulation, ActionType::Influence)
            .map_or(AgentAction::EndTurn, AgentAction::Influence)
    }
}

/// Pushes towards whichever bound the disposition already leans to, but never
/// plays the same action type twice in a row.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdaptiveAgent;

impl AdaptiveAgent {
    fn preferred(simulation: &CombatSimulation) -> ActionType {
        let leaning = if simulation.disposition() <= 0 {
            ActionType::Strike
        } else {
            ActionType::Influence
        };
        match (simulation.momentum().last_action, leaning) {
            (Some(ActionType::Strike), ActionType::Strike) => ActionType::Influence,
            (Some(ActionType::Influence), ActionType::Influence) => ActionType::Strike,
            _ => leaning,
        }
    }
}

impl Agent for AdaptiveAgent {
    fn name(&self) -> &'static str {
        "adaptive"
    }

    fn select_action(&mut self, simulation: &CombatSimulation) -> AgentAction {
        match Self::preferred(simulation) {
            ActionType::Influence => best_card(simulation, ActionType::Influence)
                .map_or(AgentAction::EndTurn, AgentAction::Influence),
            _ => best_card(simulation, ActionType::Strike)
                .map_or(AgentAction::EndTurn, AgentAction::Strike),
        }
    }
}

/// Sacrifices its weakest card every turn it can, then plays greedily towards
/// the side the disposition leans to.
#[derive(Clone, Copy, Debug, Default)]
pub struct SacrificeBiasedAgent;

impl Agent for SacrificeBiasedAgent {
    fn name(&self) -> &'static str {
        "sacrifice-biased"
    }

    fn select_action(&mut self, simulation: &CombatSimulation) -> AgentAction {
        if simulation.can_sacrifice() && simulation.hand().len() > 1 {
            let weakest = simulation
                .hand()
                .iter()
                .min_by_key(|card| (card.base_power, card.id));
            if let Some(card) = weakest {
                return AgentAction::Sacrifice(card.id);
            }
        }

        if simulation.disposition() <= 0 {
            best_card(simulation, ActionType::Strike)
                .map_or(AgentAction::EndTurn, AgentAction::Strike)
        } else {
            best_card(simulation, ActionType::Influence)
                .map_or(AgentAction::EndTurn, AgentAction::Influence)
        }
    }
}
