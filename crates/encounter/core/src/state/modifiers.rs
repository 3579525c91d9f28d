//! Enemy-imposed modifiers and sacrifice bookkeeping.

use bitflags::bitflags;

use super::momentum::ActionType;

/// Pending adapt penalty and the action type it punishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptPenalty {
    pub amount: u32,
    pub target: ActionType,
}

/// Transient modifiers left behind by enemy actions.
///
/// Each is consumed the next time the action type it targets is played:
/// defend by a strike, provoke by an influence, adapt by its stored target.
/// A positive plea backlash turns into hero self-damage on the next strike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyModifiers {
    pub defend_reduction: u32,
    pub provoke_penalty: u32,
    pub adapt: Option<AdaptPenalty>,
    pub plea_backlash: u32,
}

impl EnemyModifiers {
    /// Adapt penalty that applies if `action` is played next, 0 otherwise.
    pub fn adapt_penalty_for(&self, action: ActionType) -> u32 {
        match self.adapt {
            Some(adapt) if adapt.target == action => adapt.amount,
            _ => 0,
        }
    }

    /// Clears whichever modifiers target `action`.
    pub(crate) fn consume_for(&mut self, action: ActionType) {
        match action {
            ActionType::Strike => self.defend_reduction = 0,
            ActionType::Influence => self.provoke_penalty = 0,
            ActionType::Sacrifice => {}
        }
        if self.adapt.is_some_and(|adapt| adapt.target == action) {
            self.adapt = None;
        }
    }
}

bitflags! {
    /// Per-turn flags, cleared at both ends of the player turn.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(transparent)
    )]
    pub struct TurnFlags: u8 {
        const SACRIFICE_USED = 1 << 0;
    }
}

/// Sacrifice bookkeeping.
///
/// `enemy_buff` only ever grows during an encounter and is added to the
/// damage of every enemy attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SacrificeState {
    pub flags: TurnFlags,
    pub enemy_buff: u32,
}

impl SacrificeState {
    pub fn used_this_turn(&self) -> bool {
        self.flags.contains(TurnFlags::SACRIFICE_USED)
    }
}
