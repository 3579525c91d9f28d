//! The combat state machine.
//!
//! [`CombatSimulation`] is the only type that mutates an [`EncounterState`].
//! Every action method is atomic: it validates everything first and either
//! applies completely or returns an [`ActionRejection`] without touching the
//! state, the RNG, or the fate deck.
//!
//! A turn cycle looks like this:
//!
//! ```text
//! PlayerTurn --end_player_turn--> EnemyTurn --resolve_enemy_action-->
//!     EnemyTurn --begin_player_turn--> PlayerTurn
//! ```
//!
//! Any action that sets an outcome or drops the hero to 0 HP moves the
//! encounter to `Finished`, after which every method rejects.

mod actions;
mod builder;
mod errors;
mod turns;

pub use builder::EncounterBuilder;
pub use errors::ActionRejection;

use crate::calculator::{self, PowerInputs};
use crate::enemy::EnemyArchetype;
use crate::env::DeterministicRng;
use crate::fate::{FateCard, FateDeck};
use crate::resonance::ResonanceZone;
use crate::state::{
    ActionCounts, ActionType, Card, CardId, EchoSlot, EncounterPhase, EncounterState,
    EnemyModifiers, MomentumState, Outcome,
};

/// Everything one accepted player action did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionReport {
    pub action: ActionType,
    pub card: CardId,
    /// True for a replay through [`CombatSimulation::echo`].
    pub echoed: bool,
    /// Effective power after every modifier; 0 for sacrifices.
    pub power: u32,
    pub disposition_before: i32,
    pub disposition_after: i32,
    pub energy_spent: u32,
    /// Fate card the action resolved with, if any.
    pub fate: Option<FateCard>,
    /// HP the hero lost to self-damage.
    pub hero_damage: u32,
    /// Cards moved to the exhaust pile, in order.
    pub exhausted: Vec<CardId>,
    /// Set when this action resolved the encounter.
    pub outcome: Option<Outcome>,
}

/// One encounter: state, private RNG, and fate deck.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatSimulation {
    pub(crate) state: EncounterState,
    pub(crate) rng: DeterministicRng,
    pub(crate) fate: FateDeck,
}

impl CombatSimulation {
    /// Starts building an encounter against `enemy` with the given hand.
    pub fn builder(enemy: EnemyArchetype, hand: Vec<Card>) -> EncounterBuilder {
        EncounterBuilder::new(enemy, hand)
    }

    pub fn state(&self) -> &EncounterState {
        &self.state
    }

    pub fn disposition(&self) -> i32 {
        self.state.disposition
    }

    pub fn starting_disposition(&self) -> i32 {
        self.state.starting_disposition
    }

    pub fn energy(&self) -> u32 {
        self.state.energy
    }

    pub fn hero_hp(&self) -> u32 {
        self.state.hero_hp
    }

    pub fn hero_max_hp(&self) -> u32 {
        self.state.hero_max_hp
    }

    pub fn hero_defeated(&self) -> bool {
        self.state.hero_defeated()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome
    }

    pub fn phase(&self) -> EncounterPhase {
        self.state.phase
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    pub fn resonance(&self) -> ResonanceZone {
        self.state.resonance
    }

    pub fn enemy(&self) -> &EnemyArchetype {
        &self.state.enemy
    }

    pub fn hand(&self) -> &[Card] {
        self.state.zones.hand()
    }

    pub fn discard(&self) -> &[Card] {
        self.state.zones.discard()
    }

    pub fn exhausted(&self) -> &[Card] {
        self.state.zones.exhaust()
    }

    pub fn momentum(&self) -> &MomentumState {
        &self.state.momentum
    }

    pub fn modifiers(&self) -> &EnemyModifiers {
        &self.state.modifiers
    }

    pub fn echo_slot(&self) -> &EchoSlot {
        &self.state.echo
    }

    pub fn enemy_buff(&self) -> u32 {
        self.state.sacrifice.enemy_buff
    }

    pub fn action_counts(&self) -> &ActionCounts {
        &self.state.counts
    }

    /// Fate cards left before the next reshuffle.
    pub fn fate_remaining(&self) -> usize {
        self.fate.remaining()
    }

    /// True when the driving loop should stop asking for player actions:
    /// energy is spent and the encounter is still undecided.
    pub fn is_auto_turn_end(&self) -> bool {
        self.state.energy == 0 && self.state.outcome.is_none()
    }

    /// True when a sacrifice would be accepted for some card in hand.
    pub fn can_sacrifice(&self) -> bool {
        self.ensure_player_turn().is_ok()
            && !self.state.sacrifice.used_this_turn()
            && !self.state.zones.hand().is_empty()
    }

    /// Energy cost of a card in hand after resonance discounts.
    pub fn playable_cost(&self, card: CardId) -> Option<u32> {
        self.state
            .zones
            .find_in_hand(card)
            .map(|card| calculator::effective_cost(card.cost, self.state.resonance))
    }

    /// True when `card` could be struck or influenced with right now.
    pub fn can_play(&self, card: CardId) -> bool {
        self.ensure_player_turn().is_ok()
            && self
                .playable_cost(card)
                .is_some_and(|cost| cost <= self.state.energy)
    }

    /// Cards in hand that [`can_play`](Self::can_play) accepts.
    pub fn playable_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.hand().iter().filter(|card| self.can_play(card.id))
    }

    /// Power `card` would have if played as `action` with no fate card.
    ///
    /// Reads the current momentum and enemy modifiers and consumes no
    /// randomness. Sacrifices always preview as 0.
    pub fn preview_power(&self, card: CardId, action: ActionType) -> Option<u32> {
        let card = self.state.zones.find_in_hand(card)?;
        match action {
            ActionType::Sacrifice => Some(0),
            _ => Some(self.resolve_power(action, card.base_power, None).0),
        }
    }

    /// Rejects when the encounter is over.
    fn ensure_live(&self) -> Result<(), ActionRejection> {
        if let Some(outcome) = self.state.outcome {
            return Err(ActionRejection::EncounterFinished { outcome });
        }
        if self.state.hero_defeated() {
            return Err(ActionRejection::HeroDefeated);
        }
        Ok(())
    }

    fn ensure_player_turn(&self) -> Result<(), ActionRejection> {
        self.ensure_live()?;
        match self.state.phase {
            EncounterPhase::PlayerTurn => Ok(()),
            phase => Err(ActionRejection::NotPlayerTurn { phase }),
        }
    }

    /// Moves to `Finished` if the last change decided the encounter.
    fn settle(&mut self) -> Option<Outcome> {
        if self.state.outcome.is_none() {
            self.state.outcome = Outcome::from_disposition(self.state.disposition);
        }
        if self.state.outcome.is_some() || self.state.hero_defeated() {
            self.state.phase = EncounterPhase::Finished;
        }
        self.state.outcome
    }

    /// Evaluates keyword gates and the power formula for an action about to
    /// be played.
    fn resolve_power(
        &self,
        action: ActionType,
        base_power: u32,
        fate: Option<FateCard>,
    ) -> (u32, calculator::KeywordGates) {
        let state = &self.state;
        let keyword = fate.and_then(|card| card.keyword);
        let gates = calculator::gates::evaluate(
            keyword,
            action,
            state.momentum.last_action,
            state.disposition,
        );

        let defend_reduction = match action {
            ActionType::Strike if !gates.ignore_defend => state.modifiers.defend_reduction,
            _ => 0,
        };

        let inputs = PowerInputs {
            base_power,
            prospective_streak: state.momentum.prospective_streak(action),
            previous_streak: state.momentum.streak_count,
            last_action: state.momentum.last_action,
            current_action: action,
            keyword,
            fate_modifier: fate.map_or(0, |card| card.modifier),
            resonance: state.resonance,
            defend_reduction,
            adapt_penalty: state.modifiers.adapt_penalty_for(action),
            keyword_penalty: gates.keyword_penalty,
        };

        let power = calculator::effective_power(&inputs);
        let power = match action {
            ActionType::Influence if !gates.ignore_provoke => {
                calculator::apply_provoke(power, state.modifiers.provoke_penalty)
            }
            _ => power,
        };
        (power, gates)
    }
}
