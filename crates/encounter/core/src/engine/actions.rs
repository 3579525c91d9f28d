//! Player actions: strike, influence, sacrifice, echo.

use super::{ActionRejection, ActionReport, CombatSimulation};
use crate::calculator::KeywordGates;
use crate::config::EncounterConfig;
use crate::enemy::EnemyProfile;
use crate::fate::FateCard;
use crate::state::{ActionType, Card, CardId, EchoRecord, EchoSlot, TurnFlags};

/// A strike or influence that passed validation.
struct Play {
    action: ActionType,
    card: CardId,
    base_power: u32,
    fate: Option<FateCard>,
    energy_spent: u32,
    echoed: bool,
}

impl CombatSimulation {
    /// Strike with `card`, drawing a fate card from the encounter's deck.
    pub fn strike(&mut self, card: CardId) -> Result<ActionReport, ActionRejection> {
        let card = self.validate_card_play(card)?;
        let fate = self.fate.draw(&mut self.rng);
        Ok(self.play_card(ActionType::Strike, card, fate))
    }

    /// Strike with an explicit fate card, or none.
    pub fn strike_with(
        &mut self,
        card: CardId,
        fate: Option<FateCard>,
    ) -> Result<ActionReport, ActionRejection> {
        let card = self.validate_card_play(card)?;
        Ok(self.play_card(ActionType::Strike, card, fate))
    }

    /// Influence with `card`, drawing a fate card from the encounter's deck.
    pub fn influence(&mut self, card: CardId) -> Result<ActionReport, ActionRejection> {
        let card = self.validate_card_play(card)?;
        let fate = self.fate.draw(&mut self.rng);
        Ok(self.play_card(ActionType::Influence, card, fate))
    }

    /// Influence with an explicit fate card, or none.
    pub fn influence_with(
        &mut self,
        card: CardId,
        fate: Option<FateCard>,
    ) -> Result<ActionReport, ActionRejection> {
        let card = self.validate_card_play(card)?;
        Ok(self.play_card(ActionType::Influence, card, fate))
    }

    /// Exhaust `card` for energy.
    ///
    /// Once per player turn. Refunds energy (capped), permanently buffs enemy
    /// attacks by one, and seals the echo slot. In a constructive zone a coin
    /// flip may exhaust one more random card from hand.
    pub fn sacrifice(&mut self, card: CardId) -> Result<ActionReport, ActionRejection> {
        self.ensure_player_turn()?;
        if self.state.sacrifice.used_this_turn() {
            return Err(ActionRejection::SacrificeAlreadyUsed);
        }
        let Some(card) = self.state.zones.exhaust_from_hand(card) else {
            return Err(ActionRejection::CardNotInHand { card });
        };

        let mut exhausted = vec![card.id];
        let state = &mut self.state;
        state.energy = state
            .energy
            .saturating_add(EncounterConfig::SACRIFICE_ENERGY_REFUND)
            .min(EncounterConfig::MAX_ENERGY);
        state.sacrifice.enemy_buff += 1;
        state.sacrifice.flags.insert(TurnFlags::SACRIFICE_USED);
        state.echo = EchoSlot::Sealed;
        state.counts.record(ActionType::Sacrifice);

        if state.resonance.is_constructive()
            && self.rng.next_bool(state.config.sacrifice_exhaust_chance)
        {
            let extra = self
                .rng
                .pick_index(state.zones.hand().len())
                .and_then(|index| state.zones.exhaust_hand_index(index));
            if let Some(extra) = extra {
                exhausted.push(extra.id);
            }
        }

        Ok(ActionReport {
            action: ActionType::Sacrifice,
            card: card.id,
            echoed: false,
            power: 0,
            disposition_before: state.disposition,
            disposition_after: state.disposition,
            energy_spent: 0,
            fate: None,
            hero_damage: 0,
            exhausted,
            outcome: None,
        })
    }

    /// Replay the previous strike or influence for free.
    ///
    /// Uses the stored base power and keyword with a caller-supplied fate
    /// modifier; nothing is drawn. The replay counts towards the streak.
    pub fn echo(&mut self, fate_modifier: i32) -> Result<ActionReport, ActionRejection> {
        self.ensure_player_turn()?;
        let record = match self.state.echo {
            EchoSlot::Ready(record) => record,
            EchoSlot::Empty => return Err(ActionRejection::NothingToEcho),
            EchoSlot::Sealed => return Err(ActionRejection::EchoAfterSacrifice),
            EchoSlot::Used(_) => return Err(ActionRejection::EchoAlreadyUsed),
        };

        let fate = FateCard {
            modifier: fate_modifier,
            keyword: record.keyword,
        };
        Ok(self.apply_play(Play {
            action: record.action,
            card: record.card,
            base_power: record.base_power,
            fate: Some(fate),
            energy_spent: 0,
            echoed: true,
        }))
    }

    fn validate_card_play(&self, id: CardId) -> Result<Card, ActionRejection> {
        self.ensure_player_turn()?;
        let card = self
            .state
            .zones
            .find_in_hand(id)
            .ok_or(ActionRejection::CardNotInHand { card: id })?;
        let required = crate::calculator::effective_cost(card.cost, self.state.resonance);
        if required > self.state.energy {
            return Err(ActionRejection::InsufficientEnergy {
                required,
                available: self.state.energy,
            });
        }
        Ok(card.clone())
    }

    fn play_card(
        &mut self,
        action: ActionType,
        card: Card,
        fate: Option<FateCard>,
    ) -> ActionReport {
        let cost = crate::calculator::effective_cost(card.cost, self.state.resonance);
        self.state.energy -= cost;
        self.state.zones.discard_from_hand(card.id);
        self.apply_play(Play {
            action,
            card: card.id,
            base_power: card.base_power,
            fate,
            energy_spent: cost,
            echoed: false,
        })
    }

    /// Shared resolution of strikes, influences, and their echoes.
    fn apply_play(&mut self, play: Play) -> ActionReport {
        let (power, gates) = self.resolve_power(play.action, play.base_power, play.fate);
        let before = self.state.disposition;

        let hero_damage = match play.action {
            ActionType::Strike => {
                self.state.disposition = EncounterConfig::clamp_disposition(before - power as i32);
                self.strike_self_damage(gates)
            }
            ActionType::Influence => {
                self.state.disposition = EncounterConfig::clamp_disposition(before + power as i32);
                self.check_plea(before);
                0
            }
            // sacrifices never reach the play path
            ActionType::Sacrifice => 0,
        };
        let hp_before = self.state.hero_hp;
        self.state.hero_hp = hp_before.saturating_sub(hero_damage);

        let state = &mut self.state;
        state.modifiers.consume_for(play.action);
        state.momentum.record(play.action);
        if play.echoed {
            state.counts.echo += 1;
            if let EchoSlot::Ready(original) = state.echo {
                state.echo = EchoSlot::Used(original);
            }
        } else {
            state.counts.record(play.action);
            state.echo = EchoSlot::Ready(EchoRecord {
                card: play.card,
                action: play.action,
                base_power: play.base_power,
                fate_modifier: play.fate.map_or(0, |card| card.modifier),
                keyword: play.fate.and_then(|card| card.keyword),
            });
        }

        let outcome = self.settle();

        ActionReport {
            action: play.action,
            card: play.card,
            echoed: play.echoed,
            power,
            disposition_before: before,
            disposition_after: self.state.disposition,
            energy_spent: play.energy_spent,
            fate: play.fate,
            hero_damage: hp_before - self.state.hero_hp,
            exhausted: Vec::new(),
            outcome,
        }
    }

    /// Hero damage caused by a strike: pending plea backlash plus the
    /// constructive-zone penalty unless warded. Clears the backlash.
    fn strike_self_damage(&mut self, gates: KeywordGates) -> u32 {
        let backlash = core::mem::take(&mut self.state.modifiers.plea_backlash);
        let zone_penalty = if self.state.resonance.is_constructive() && !gates.ward {
            EncounterConfig::CONSTRUCTIVE_STRIKE_SELF_DAMAGE
        } else {
            0
        };
        backlash + zone_penalty
    }

    /// A sentient enemy pleads when an influence lifts it across the plea
    /// threshold without resolving the encounter.
    fn check_plea(&mut self, before: i32) {
        let after = self.state.disposition;
        let crossed = before < EncounterConfig::PLEA_THRESHOLD
            && after >= EncounterConfig::PLEA_THRESHOLD
            && after < EncounterConfig::DISPOSITION_MAX;
        if let (true, EnemyProfile::Sentient(will)) = (crossed, self.state.enemy.profile) {
            self.state.modifiers.plea_backlash = will.plea_backlash();
        }
    }
}
