//! Enemy action resolution.
//!
//! A pure dispatcher: it turns one [`EnemyAction`] into state changes and
//! knows nothing about how the action was chosen.

use super::EnemyAction;
use crate::config::EncounterConfig;
use crate::state::{AdaptPenalty, EncounterPhase, EncounterState};

/// What an enemy action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyActionReport {
    pub action: EnemyAction,
    /// HP actually removed from the hero.
    pub hero_damage: u32,
    pub hero_hp: u32,
    pub hero_defeated: bool,
}

/// Apply an enemy action to the encounter state.
///
/// # Effects
///
/// - `Attack`: hero loses `damage + enemy_buff` HP (floor 0); at 0 HP the
///   encounter is finished
/// - `Defend` / `Provoke`: stores the value for the next strike / influence
/// - `Adapt`: stores `max(3, streak bonus)` against the hero's current streak
///   type; without a streak there is nothing to adapt to
///
/// The caller is responsible for refusing finished encounters.
pub fn resolve(state: &mut EncounterState, action: EnemyAction) -> EnemyActionReport {
    let hp_before = state.hero_hp;

    match action {
        EnemyAction::Attack { damage } => {
            let total = damage.saturating_add(state.sacrifice.enemy_buff);
            state.hero_hp = state.hero_hp.saturating_sub(total);
        }
        EnemyAction::Defend { reduction } => {
            state.modifiers.defend_reduction = reduction;
        }
        EnemyAction::Provoke { penalty } => {
            state.modifiers.provoke_penalty = penalty;
        }
        EnemyAction::Adapt => {
            let amount = EncounterConfig::MIN_ADAPT_PENALTY.max(state.momentum.streak_bonus());
            state.modifiers.adapt = state
                .momentum
                .streak_type
                .map(|target| AdaptPenalty { amount, target });
        }
    }

    let hero_defeated = state.hero_defeated();
    if hero_defeated {
        state.phase = EncounterPhase::Finished;
    }

    EnemyActionReport {
        action,
        hero_damage: hp_before - state.hero_hp,
        hero_hp: state.hero_hp,
        hero_defeated,
    }
}
