//! Disposition power calculation.
//!
//! Pure functions only: no state, no randomness. Callers evaluate the formula
//! *before* recording the action in the momentum tracker, passing the
//! prospective streak of the action about to be played and the streak it is
//! about to break.
//!
//! # Core Functions
//!
//! - [`effective_power`]: the power formula with its hard cap
//! - [`gates::evaluate`]: keyword exceptions applied before the formula
//! - [`effective_cost`]: energy cost after resonance discounts

pub mod gates;

pub use gates::KeywordGates;

use crate::config::EncounterConfig;
use crate::fate::FateKeyword;
use crate::resonance::ResonanceZone;
use crate::state::ActionType;

/// Everything the power formula reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerInputs {
    pub base_power: u32,
    /// Streak count the action will have once played.
    pub prospective_streak: u32,
    /// Streak count before the action; the one a switch breaks.
    pub previous_streak: u32,
    pub last_action: Option<ActionType>,
    pub current_action: ActionType,
    pub keyword: Option<FateKeyword>,
    pub fate_modifier: i32,
    pub resonance: ResonanceZone,
    pub defend_reduction: u32,
    pub adapt_penalty: u32,
    /// Extra penalty contributed by keyword gates; 0 unless a gate sets it.
    pub keyword_penalty: u32,
}

impl PowerInputs {
    /// Inputs with no streak history, fate card, or enemy modifiers.
    pub fn plain(base_power: u32, action: ActionType, resonance: ResonanceZone) -> Self {
        Self {
            base_power,
            prospective_streak: 1,
            previous_streak: 0,
            last_action: None,
            current_action: action,
            keyword: None,
            fate_modifier: 0,
            resonance,
            defend_reduction: 0,
            adapt_penalty: 0,
            keyword_penalty: 0,
        }
    }
}

/// Calculate the effective power of one action.
///
/// # Formula
///
/// ```text
/// surged_base     = base × 3/2            if keyword == Surge, else base
/// streak_bonus    = max(0, streak - 1)
/// switch_penalty  = max(0, previous_streak - 2)   if switching and previous_streak >= 3
/// threat_bonus    = +2                    if last == Strike and current == Influence
/// resonance_bonus = +2                    strike in destructive / influence in constructive
///
/// raw = surged_base + streak_bonus + threat_bonus + fate_modifier + resonance_bonus
///       - switch_penalty - defend_reduction - adapt_penalty - keyword_penalty
///
/// result = clamp(raw, 0, 25)
/// ```
pub fn effective_power(inputs: &PowerInputs) -> u32 {
    let base = inputs.base_power as i64;
    let surged_base = if inputs.keyword == Some(FateKeyword::Surge) {
        base * 3 / 2
    } else {
        base
    };

    let streak_bonus = (inputs.prospective_streak as i64 - 1).max(0);

    let switching = inputs
        .last_action
        .is_some_and(|last| last != inputs.current_action);
    let switch_penalty = if switching && inputs.previous_streak >= 3 {
        inputs.previous_streak as i64 - 2
    } else {
        0
    };

    let threat_bonus = if inputs.last_action == Some(ActionType::Strike)
        && inputs.current_action == ActionType::Influence
    {
        EncounterConfig::THREAT_BONUS as i64
    } else {
        0
    };

    let resonance_bonus = match inputs.current_action {
        ActionType::Strike if inputs.resonance.is_destructive() => {
            EncounterConfig::RESONANCE_BONUS as i64
        }
        ActionType::Influence if inputs.resonance.is_constructive() => {
            EncounterConfig::RESONANCE_BONUS as i64
        }
        _ => 0,
    };

    let raw = surged_base + streak_bonus + threat_bonus + inputs.fate_modifier as i64
        + resonance_bonus
        - switch_penalty
        - inputs.defend_reduction as i64
        - inputs.adapt_penalty as i64
        - inputs.keyword_penalty as i64;

    raw.clamp(0, EncounterConfig::POWER_CAP as i64) as u32
}

/// Energy cost of a card in the given zone: one cheaper in destructive zones, floor 0.
pub fn effective_cost(cost: u32, resonance: ResonanceZone) -> u32 {
    if resonance.is_destructive() {
        cost.saturating_sub(1)
    } else {
        cost
    }
}

/// Applies a provoke penalty to an influence's effective power, floor 0.
pub fn apply_provoke(power: u32, provoke_penalty: u32) -> u32 {
    power.saturating_sub(provoke_penalty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strike(base: u32) -> PowerInputs {
        PowerInputs::plain(base, ActionType::Strike, ResonanceZone::Neutral)
    }

    #[test]
    fn streak_of_three_strikes() {
        let powers: Vec<u32> = (1..=3)
            .map(|streak| {
                effective_power(&PowerInputs {
                    prospective_streak: streak,
                    previous_streak: streak - 1,
                    last_action: (streak > 1).then_some(ActionType::Strike),
                    ..strike(5)
                })
            })
            .collect();
        assert_eq!(powers, vec![5, 6, 7]);
    }

    #[test]
    fn surge_uses_integer_three_halves() {
        let inputs = PowerInputs {
            keyword: Some(FateKeyword::Surge),
            ..strike(5)
        };
        assert_eq!(effective_power(&inputs), 7);
    }

    #[test]
    fn switch_penalty_needs_a_long_streak() {
        let broken_long = PowerInputs {
            last_action: Some(ActionType::Influence),
            previous_streak: 4,
            ..strike(8)
        };
        assert_eq!(effective_power(&broken_long), 6);

        let broken_short = PowerInputs {
            last_action: Some(ActionType::Influence),
            previous_streak: 2,
            ..strike(8)
        };
        assert_eq!(effective_power(&broken_short), 8);
    }

    #[test]
    fn threat_bonus_after_strike() {
        let inputs = PowerInputs {
            last_action: Some(ActionType::Strike),
            previous_streak: 1,
            ..PowerInputs::plain(4, ActionType::Influence, ResonanceZone::Neutral)
        };
        assert_eq!(effective_power(&inputs), 6);
    }

    #[test]
    fn resonance_bonus_by_family() {
        let dark_strike = PowerInputs::plain(4, ActionType::Strike, ResonanceZone::Dark);
        let dark_influence = PowerInputs::plain(4, ActionType::Influence, ResonanceZone::Dark);
        let light_influence =
            PowerInputs::plain(4, ActionType::Influence, ResonanceZone::DeepLight);
        assert_eq!(effective_power(&dark_strike), 6);
        assert_eq!(effective_power(&dark_influence), 4);
        assert_eq!(effective_power(&light_influence), 6);
    }

    #[test]
    fn result_is_capped_and_never_negative() {
        let huge = PowerInputs {
            fate_modifier: 40,
            ..strike(u32::MAX)
        };
        assert_eq!(effective_power(&huge), 25);

        let crushed = PowerInputs {
            fate_modifier: -2,
            defend_reduction: 10,
            adapt_penalty: 3,
            ..strike(3)
        };
        assert_eq!(effective_power(&crushed), 0);
    }

    #[test]
    fn cost_discount_only_in_destructive_zones() {
        assert_eq!(effective_cost(2, ResonanceZone::DeepDark), 1);
        assert_eq!(effective_cost(0, ResonanceZone::Dark), 0);
        assert_eq!(effective_cost(2, ResonanceZone::Neutral), 2);
        assert_eq!(effective_cost(2, ResonanceZone::Light), 2);
    }

    #[test]
    fn provoke_floors_at_zero() {
        assert_eq!(apply_provoke(5, 3), 2);
        assert_eq!(apply_provoke(2, 3), 0);
    }
}
