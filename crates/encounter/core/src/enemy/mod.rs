//! Enemy archetypes, actions, and behavior.
//!
//! - [`EnemyAction`]: the closed set of things an enemy can do on its turn
//! - [`resolver`]: applies an action to encounter state
//! - [`behavior`]: decides which action comes next
mod behavior;
mod resolver;

pub use behavior::{BehaviorState, EnemyMode, EnemyPolicy, EnemyTuning, ModeSelector};
pub use resolver::{EnemyActionReport, resolve};

/// Will of a sentient enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WillProfile {
    pub will: u32,
}

impl WillProfile {
    pub const fn new(will: u32) -> Self {
        Self { will }
    }

    /// Hero self-damage stored when this enemy pleads: `max(1, will / 10)`.
    pub const fn plea_backlash(&self) -> u32 {
        let backlash = self.will / 10;
        if backlash == 0 { 1 } else { backlash }
    }
}

/// What an enemy is capable of.
///
/// Only [`EnemyProfile::Sentient`] carries a will, so plea handling can only
/// be reached for enemies that actually declare one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyProfile {
    /// Driven by instinct; never pleads.
    #[default]
    Beast,
    /// Has a will that can break into a plea.
    Sentient(WillProfile),
}

/// Enemy identity as consumed by the encounter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyArchetype {
    /// Content identifier, also the key for affinity lookups.
    pub id: String,
    pub profile: EnemyProfile,
}

impl EnemyArchetype {
    pub fn beast(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            profile: EnemyProfile::Beast,
        }
    }

    pub fn sentient(id: impl Into<String>, will: u32) -> Self {
        Self {
            id: id.into(),
            profile: EnemyProfile::Sentient(WillProfile::new(will)),
        }
    }
}

/// One enemy action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum EnemyAction {
    /// Hits the hero for `damage` plus the accumulated sacrifice buff.
    Attack { damage: u32 },
    /// Reduces the power of the hero's next strike.
    Defend { reduction: u32 },
    /// Reduces the power of the hero's next influence.
    Provoke { penalty: u32 },
    /// Punishes the hero's current streak type.
    Adapt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plea_backlash_has_a_floor() {
        assert_eq!(WillProfile::new(0).plea_backlash(), 1);
        assert_eq!(WillProfile::new(9).plea_backlash(), 1);
        assert_eq!(WillProfile::new(35).plea_backlash(), 3);
    }

    #[test]
    fn action_names() {
        assert_eq!(EnemyAction::Attack { damage: 3 }.as_ref(), "attack");
        assert_eq!(EnemyAction::Adapt.to_string(), "adapt");
    }
}
