//! Drives one full encounter between an agent and an enemy policy.

use encounter_core::{
    CombatSimulation, EnemyMode, EnemyPolicy, EnemyTuning, ModeSelector, Outcome, SeedStream,
    derive_seed,
};
use tracing::{debug, info};

use crate::agent::{Agent, AgentAction};
use crate::report::{RunOutcome, RunResult, entropy_of};

/// Player micro-actions allowed per turn before the turn is forced to end.
pub const MAX_ACTIONS_PER_TURN: u32 = 12;

/// Player turns allowed before a run is cut off.
pub const MAX_TURNS: u32 = 50;

/// An encounter in progress under runner control.
pub struct EncounterRun<P: EnemyPolicy = ModeSelector> {
    simulation: CombatSimulation,
    policy: P,
    seed: u64,
    turns_played: u32,
    rejected_actions: u32,
}

impl EncounterRun<ModeSelector> {
    /// Pairs a simulation with a [`ModeSelector`] seeded from its own stream.
    pub fn new(
        simulation: CombatSimulation,
        enemy_mode: EnemyMode,
        base_damage: u32,
        seed: u64,
    ) -> Self {
        let policy = ModeSelector::new(
            enemy_mode,
            EnemyTuning::with_base_damage(base_damage),
            derive_seed(seed, SeedStream::ENEMY_BEHAVIOR, 0),
        );
        Self::with_policy(simulation, policy, seed)
    }
}

impl<P: EnemyPolicy> EncounterRun<P> {
    pub fn with_policy(simulation: CombatSimulation, policy: P, seed: u64) -> Self {
        Self {
            simulation,
            policy,
            seed,
            turns_played: 0,
            rejected_actions: 0,
        }
    }

    pub fn simulation(&self) -> &CombatSimulation {
        &self.simulation
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// True once the encounter is decided or the turn cap is reached.
    pub fn is_over(&self) -> bool {
        self.simulation.is_finished() || self.turns_played >= MAX_TURNS
    }

    /// Plays one player turn and the enemy's answer.
    ///
    /// Returns false when there was nothing left to play.
    pub fn play_turn(&mut self, agent: &mut dyn Agent) -> bool {
        if self.is_over() {
            return false;
        }
        self.turns_played += 1;
        let turn = self.simulation.turn();

        for _ in 0..MAX_ACTIONS_PER_TURN {
            if self.simulation.is_finished() || self.simulation.is_auto_turn_end() {
                break;
            }
            let action = agent.select_action(&self.simulation);
            let result = match action {
                AgentAction::EndTurn => break,
                AgentAction::Strike(card) => self.simulation.strike(card),
                AgentAction::Influence(card) => self.simulation.influence(card),
                AgentAction::Sacrifice(card) => self.simulation.sacrifice(card),
            };
            match result {
                Ok(report) => debug!(
                    turn,
                    action = %report.action,
                    card = %report.card,
                    power = report.power,
                    disposition = report.disposition_after,
                    "player action"
                ),
                Err(rejection) => {
                    self.rejected_actions += 1;
                    debug!(turn, ?action, %rejection, agent = agent.name(), "action rejected");
                }
            }
        }

        if self.simulation.is_finished() {
            return true;
        }
        if let Err(rejection) = self.simulation.end_player_turn() {
            debug!(turn, %rejection, "turn could not end");
            return false;
        }

        let enemy_action = self.policy.next_action(&self.simulation);
        match self.simulation.resolve_enemy_action(enemy_action) {
            Ok(report) => debug!(
                turn,
                action = %report.action,
                hero_damage = report.hero_damage,
                hero_hp = report.hero_hp,
                "enemy action"
            ),
            Err(rejection) => debug!(turn, %rejection, "enemy action rejected"),
        }

        if !self.simulation.is_finished() && self.simulation.begin_player_turn().is_err() {
            return false;
        }
        true
    }

    /// Consumes the run and summarises it.
    pub fn finish(self, agent_name: &str) -> RunResult {
        let sim = &self.simulation;
        let outcome = match sim.outcome() {
            Some(Outcome::Destroyed) => RunOutcome::Destroyed,
            Some(Outcome::Subjugated) => RunOutcome::Subjugated,
            None if sim.hero_defeated() => RunOutcome::HeroDefeated,
            None => RunOutcome::TurnLimit,
        };
        let counts = sim.action_counts();

        let result = RunResult {
            agent: agent_name.to_owned(),
            seed: self.seed,
            outcome,
            final_disposition: sim.disposition(),
            turns_played: self.turns_played,
            hero_hp_remaining: sim.hero_hp(),
            cards_exhausted: sim.exhausted().len(),
            strike_count: counts.strike,
            influence_count: counts.influence,
            sacrifice_count: counts.sacrifice,
            echo_count: counts.echo,
            decision_entropy: entropy_of(counts),
            rejected_actions: self.rejected_actions,
        };
        info!(
            agent = agent_name,
            seed = self.seed,
            outcome = %result.outcome,
            turns = result.turns_played,
            disposition = result.final_disposition,
            "run complete"
        );
        result
    }
}

/// Plays a whole encounter: agent turns against a [`ModeSelector`] enemy
/// until the encounter is decided or [`MAX_TURNS`] is reached.
pub fn run(
    agent: &mut dyn Agent,
    simulation: CombatSimulation,
    enemy_mode: EnemyMode,
    base_damage: u32,
    seed: u64,
) -> RunResult {
    let mut encounter = EncounterRun::new(simulation, enemy_mode, base_damage, seed);
    while encounter.play_turn(agent) {}
    encounter.finish(agent.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::GreedyStrikeAgent;
    use encounter_core::{Card, CardKind, EnemyArchetype, StaticAffinityTable};

    #[test]
    fn greedy_strike_destroys_a_passive_enemy() {
        struct Passive;
        impl EnemyPolicy for Passive {
            fn next_action(&mut self, _: &CombatSimulation) -> encounter_core::EnemyAction {
                encounter_core::EnemyAction::Defend { reduction: 0 }
            }
        }

        let hand = (1..=4).map(|id| Card::new(id, 6, 1, CardKind::Combat)).collect();
        let sim = CombatSimulation::builder(EnemyArchetype::beast("reed_stalker"), hand)
            .build(&StaticAffinityTable::new());
        let mut run = EncounterRun::with_policy(sim, Passive, 9);
        let mut agent = GreedyStrikeAgent;
        while run.play_turn(&mut agent) {}
        let result = run.finish(agent.name());

        assert_eq!(result.outcome, RunOutcome::Destroyed);
        assert_eq!(result.final_disposition, -100);
        assert_eq!(result.influence_count, 0);
        assert_eq!(result.decision_entropy, 0.0);
        assert!(result.turns_played < MAX_TURNS);
    }
}
