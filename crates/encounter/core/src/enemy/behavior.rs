//! Enemy behavior selection.
//!
//! [`EnemyPolicy`] is the seam between "what does the enemy do next" and
//! "what does that action do" ([`resolve`](super::resolve)). [`ModeSelector`]
//! is the stock policy: it reads the disposition, settles on a behavior mode,
//! and rolls a weighted action with its own RNG stream.

use super::EnemyAction;
use crate::engine::CombatSimulation;
use crate::env::DeterministicRng;

/// Chooses the enemy's next action.
pub trait EnemyPolicy: Send {
    fn next_action(&mut self, simulation: &CombatSimulation) -> EnemyAction;
}

/// Behavior mode of a [`ModeSelector`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EnemyMode {
    /// Mostly attacks.
    Aggressive,
    /// Mostly shields itself against strikes.
    Defensive,
    /// Disrupts influence and streaks.
    Cunning,
    /// Picks one of the above from the disposition every turn.
    #[default]
    Dynamic,
}

impl EnemyMode {
    /// Disposition at or below which a dynamic enemy turns defensive.
    pub const DEFENSIVE_BELOW: i32 = -40;
    /// Disposition at or above which a dynamic enemy turns cunning.
    pub const CUNNING_ABOVE: i32 = 40;

    /// Concrete mode for this turn. Never returns `Dynamic`.
    pub fn for_disposition(self, disposition: i32) -> Self {
        match self {
            Self::Dynamic if disposition <= Self::DEFENSIVE_BELOW => Self::Defensive,
            Self::Dynamic if disposition >= Self::CUNNING_ABOVE => Self::Cunning,
            Self::Dynamic => Self::Aggressive,
            fixed => fixed,
        }
    }

    /// Attack / defend / provoke / adapt weights.
    const fn weights(self) -> [u32; 4] {
        match self {
            Self::Aggressive | Self::Dynamic => [60, 15, 15, 10],
            Self::Defensive => [30, 50, 10, 10],
            Self::Cunning => [30, 10, 35, 25],
        }
    }
}

/// Magnitudes of the enemy's actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTuning {
    pub base_damage: u32,
    pub defend_reduction: u32,
    pub provoke_penalty: u32,
}

impl EnemyTuning {
    pub const DEFAULT_BASE_DAMAGE: u32 = 4;
    pub const DEFAULT_DEFEND_REDUCTION: u32 = 3;
    pub const DEFAULT_PROVOKE_PENALTY: u32 = 3;

    pub const fn with_base_damage(base_damage: u32) -> Self {
        Self {
            base_damage,
            defend_reduction: Self::DEFAULT_DEFEND_REDUCTION,
            provoke_penalty: Self::DEFAULT_PROVOKE_PENALTY,
        }
    }
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self::with_base_damage(Self::DEFAULT_BASE_DAMAGE)
    }
}

/// Captured [`ModeSelector`] state, so a paused run resumes identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorState {
    pub mode: EnemyMode,
    pub tuning: EnemyTuning,
    pub rng_state: u64,
    pub last_action: Option<EnemyAction>,
    pub turns: u32,
}

/// Weighted, mode-driven enemy policy.
#[derive(Clone, Debug)]
pub struct ModeSelector {
    mode: EnemyMode,
    tuning: EnemyTuning,
    rng: DeterministicRng,
    last_action: Option<EnemyAction>,
    turns: u32,
}

impl ModeSelector {
    pub fn new(mode: EnemyMode, tuning: EnemyTuning, seed: u64) -> Self {
        Self {
            mode,
            tuning,
            rng: DeterministicRng::new(seed),
            last_action: None,
            turns: 0,
        }
    }

    pub fn from_state(state: BehaviorState) -> Self {
        Self {
            mode: state.mode,
            tuning: state.tuning,
            rng: DeterministicRng::from_state(state.rng_state),
            last_action: state.last_action,
            turns: state.turns,
        }
    }

    pub fn state(&self) -> BehaviorState {
        BehaviorState {
            mode: self.mode,
            tuning: self.tuning,
            rng_state: self.rng.state(),
            last_action: self.last_action,
            turns: self.turns,
        }
    }

    pub fn mode(&self) -> EnemyMode {
        self.mode
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Roll the next action for a given disposition.
    ///
    /// Adapt falls back to an attack when it was the previous action or when
    /// the hero has no streak to adapt to. Exactly one draw is consumed.
    pub fn choose(&mut self, disposition: i32, hero_has_streak: bool) -> EnemyAction {
        let weights = self.mode.for_disposition(disposition).weights();
        let total: u32 = weights.iter().sum();
        let mut roll = self.rng.next_int(total);

        let mut slot = weights.len() - 1;
        for (index, weight) in weights.iter().enumerate() {
            if roll < *weight {
                slot = index;
                break;
            }
            roll -= weight;
        }

        let attack = EnemyAction::Attack {
            damage: self.tuning.base_damage,
        };
        let action = match slot {
            0 => attack,
            1 => EnemyAction::Defend {
                reduction: self.tuning.defend_reduction,
            },
            2 => EnemyAction::Provoke {
                penalty: self.tuning.provoke_penalty,
            },
            _ => {
                let repeated = self.last_action == Some(EnemyAction::Adapt);
                if repeated || !hero_has_streak {
                    attack
                } else {
                    EnemyAction::Adapt
                }
            }
        };

        self.last_action = Some(action);
        self.turns += 1;
        action
    }
}

impl EnemyPolicy for ModeSelector {
    fn next_action(&mut self, simulation: &CombatSimulation) -> EnemyAction {
        let has_streak = simulation.momentum().streak_type.is_some();
        self.choose(simulation.disposition(), has_streak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn dynamic_mode_follows_disposition() {
        assert_eq!(EnemyMode::Dynamic.for_disposition(-40), EnemyMode::Defensive);
        assert_eq!(EnemyMode::Dynamic.for_disposition(0), EnemyMode::Aggressive);
        assert_eq!(EnemyMode::Dynamic.for_disposition(40), EnemyMode::Cunning);
        assert_eq!(EnemyMode::Cunning.for_disposition(-90), EnemyMode::Cunning);
    }

    #[test]
    fn never_adapts_twice_in_a_row() {
        for mode in EnemyMode::iter() {
            let mut selector = ModeSelector::new(mode, EnemyTuning::default(), 17);
            let mut previous = None;
            for _ in 0..500 {
                let action = selector.choose(60, true);
                assert!(!(previous == Some(EnemyAction::Adapt) && action == EnemyAction::Adapt));
                previous = Some(action);
            }
        }
    }

    #[test]
    fn no_adapt_without_a_streak() {
        let mut selector = ModeSelector::new(EnemyMode::Cunning, EnemyTuning::default(), 3);
        for _ in 0..300 {
            assert_ne!(selector.choose(50, false), EnemyAction::Adapt);
        }
    }

    #[test]
    fn uses_tuning_magnitudes() {
        let tuning = EnemyTuning {
            base_damage: 9,
            defend_reduction: 4,
            provoke_penalty: 5,
        };
        let mut selector = ModeSelector::new(EnemyMode::Aggressive, tuning, 1);
        for _ in 0..200 {
            match selector.choose(0, true) {
                EnemyAction::Attack { damage } => assert_eq!(damage, 9),
                EnemyAction::Defend { reduction } => assert_eq!(reduction, 4),
                EnemyAction::Provoke { penalty } => assert_eq!(penalty, 5),
                EnemyAction::Adapt => {}
            }
        }
    }

    #[test]
    fn captured_state_resumes_identically() {
        let mut selector = ModeSelector::new(EnemyMode::Dynamic, EnemyTuning::default(), 42);
        for turn in 0..10 {
            selector.choose(turn * 7 - 30, true);
        }
        let saved = selector.state();
        let expected: Vec<EnemyAction> = (0..50)
            .map(|i| selector.choose(i - 25, i % 3 != 0))
            .collect();

        let mut resumed = ModeSelector::from_state(saved);
        let actual: Vec<EnemyAction> = (0..50)
            .map(|i| resumed.choose(i - 25, i % 3 != 0))
            .collect();
        assert_eq!(expected, actual);
        assert_eq!(resumed.turns(), 60);
    }

    #[test]
    fn aggressive_mostly_attacks() {
        let mut selector = ModeSelector::new(EnemyMode::Aggressive, EnemyTuning::default(), 99);
        let attacks = (0..1000)
            .filter(|_| matches!(selector.choose(0, true), EnemyAction::Attack { .. }))
            .count();
        assert!(attacks > 500, "attacks = {attacks}");
    }
}
