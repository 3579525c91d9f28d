//! Fate cards.
//!
//! Every strike or influence is modified by one fate card drawn from the
//! encounter's fate deck. All randomness flows through the encounter's own
//! [`DeterministicRng`](crate::env::DeterministicRng).
mod deck;

pub use deck::{FateDeck, FateDeckKind, FateDeckState};

/// Symbolic modifier on a fate card (keyword deck only).
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum FateKeyword {
    /// Base power ×3/2.
    Surge,
    /// Ignores defend/provoke near the matching disposition extreme.
    Focus,
    /// No rule effect.
    Echo,
    /// Extra penalty when switching action type.
    Shadow,
    /// Negates the constructive-zone strike self-damage.
    Ward,
}

/// A drawn fate card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FateCard {
    pub modifier: i32,
    pub keyword: Option<FateKeyword>,
}

impl FateCard {
    pub const fn numeric(modifier: i32) -> Self {
        Self {
            modifier,
            keyword: None,
        }
    }

    pub const fn keyword(modifier: i32, keyword: FateKeyword) -> Self {
        Self {
            modifier,
            keyword: Some(keyword),
        }
    }

    pub fn has_keyword(&self, keyword: FateKeyword) -> bool {
        self.keyword == Some(keyword)
    }
}
