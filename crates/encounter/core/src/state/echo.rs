//! Echo bookkeeping.
//!
//! Only strikes and influences ever produce an [`EchoRecord`]; a sacrifice
//! seals the slot instead, so there is no way to represent a replayable
//! sacrifice.

use super::card::CardId;
use super::momentum::ActionType;
use crate::fate::FateKeyword;

/// What an echo replays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EchoRecord {
    pub card: CardId,
    pub action: ActionType,
    pub base_power: u32,
    pub fate_modifier: i32,
    pub keyword: Option<FateKeyword>,
}

/// State of the echo slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EchoSlot {
    /// Nothing played yet.
    #[default]
    Empty,
    /// The previous action can be replayed.
    Ready(EchoRecord),
    /// The previous action was already replayed once.
    Used(EchoRecord),
    /// The previous action was a sacrifice.
    Sealed,
}

impl EchoSlot {
    /// Record of the last replayable action, whether or not it was echoed already.
    pub fn record(&self) -> Option<&EchoRecord> {
        match self {
            Self::Ready(record) | Self::Used(record) => Some(record),
            Self::Empty | Self::Sealed => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
