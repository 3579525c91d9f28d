//! Authoritative encounter state.
//!
//! [`EncounterState`] is plain data: every field a snapshot needs, nothing
//! derived. Only [`CombatSimulation`](crate::engine::CombatSimulation) mutates
//! it, through its action methods.
mod card;
mod echo;
mod modifiers;
mod momentum;
mod zones;

pub use card::{Card, CardId, CardKind};
pub use echo::{EchoRecord, EchoSlot};
pub use modifiers::{AdaptPenalty, EnemyModifiers, SacrificeState, TurnFlags};
pub use momentum::{ActionType, MomentumState};
pub use zones::CardZones;

use crate::config::EncounterConfig;
use crate::enemy::EnemyArchetype;
use crate::resonance::ResonanceZone;

/// Terminal result of the disposition track.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Outcome {
    /// Disposition reached the negative bound.
    Destroyed,
    /// Disposition reached the positive bound.
    Subjugated,
}

impl Outcome {
    /// Outcome implied by a disposition value, if it sits on a bound.
    pub fn from_disposition(disposition: i32) -> Option<Self> {
        if disposition <= EncounterConfig::DISPOSITION_MIN {
            Some(Self::Destroyed)
        } else if disposition >= EncounterConfig::DISPOSITION_MAX {
            Some(Self::Subjugated)
        } else {
            None
        }
    }
}

/// Where the encounter is in its turn cycle.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case")]
pub enum EncounterPhase {
    /// Player actions are accepted.
    #[default]
    PlayerTurn,
    /// Waiting for the enemy's action and the next player turn.
    EnemyTurn,
    /// Outcome set or hero dead; nothing is accepted anymore.
    Finished,
}

/// Successful player actions by type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCounts {
    pub strike: u32,
    pub influence: u32,
    pub sacrifice: u32,
    pub echo: u32,
}

impl ActionCounts {
    pub(crate) fn record(&mut self, action: ActionType) {
        match action {
            ActionType::Strike => self.strike += 1,
            ActionType::Influence => self.influence += 1,
            ActionType::Sacrifice => self.sacrifice += 1,
        }
    }

    /// Strike, influence, and sacrifice counts, in that order.
    pub fn by_type(&self) -> [u32; 3] {
        [self.strike, self.influence, self.sacrifice]
    }
}

/// Complete state of one encounter, minus the RNG and fate deck.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterState {
    pub config: EncounterConfig,
    pub enemy: EnemyArchetype,
    pub resonance: ResonanceZone,

    pub hero_hp: u32,
    pub hero_max_hp: u32,
    pub energy: u32,

    pub starting_disposition: i32,
    pub disposition: i32,
    pub outcome: Option<Outcome>,

    pub phase: EncounterPhase,
    /// Player turn number, starting at 1.
    pub turn: u32,

    pub zones: CardZones,
    pub momentum: MomentumState,
    pub sacrifice: SacrificeState,
    pub modifiers: EnemyModifiers,
    pub echo: EchoSlot,
    pub counts: ActionCounts,
}

impl EncounterState {
    /// True once the hero has no HP left.
    pub fn hero_defeated(&self) -> bool {
        self.hero_hp == 0
    }

    /// True once no action can be accepted anymore.
    pub fn is_finished(&self) -> bool {
        self.phase == EncounterPhase::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_only_on_bounds() {
        assert_eq!(Outcome::from_disposition(-100), Some(Outcome::Destroyed));
        assert_eq!(Outcome::from_disposition(100), Some(Outcome::Subjugated));
        assert_eq!(Outcome::from_disposition(-99), None);
        assert_eq!(Outcome::from_disposition(99), None);
        assert_eq!(Outcome::from_disposition(0), None);
    }
}
