use core::fmt;

/// Stable identifier of a card within one encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// Content tag of a card. Carried for the game layer and agents; the power
/// formula does not read it.
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
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardKind {
    /// Blades, fists, spells of harm
    #[default]
    Combat,
    /// Words, oaths, offerings
    Spiritual,
    /// Tricks and tools
    Utility,
}

/// A playable card.
///
/// Fields never change during an encounter; the only thing that happens to a
/// card is moving between hand, discard, and exhaust.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub id: CardId,
    pub base_power: u32,
    pub cost: u32,
    pub kind: CardKind,
}

impl Card {
    pub const fn new(id: u32, base_power: u32, cost: u32, kind: CardKind) -> Self {
        Self {
            id: CardId(id),
            base_power,
            cost,
            kind,
        }
    }
}
