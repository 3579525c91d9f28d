use std::collections::VecDeque;

use strum::IntoEnumIterator;

use super::{FateCard, FateKeyword};
use crate::env::DeterministicRng;

/// Which fate deck composition an encounter uses.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FateDeckKind {
    /// Numeric modifiers only.
    Basic,
    /// Every card carries a keyword.
    #[default]
    Keyword,
}

/// Exported pile contents, used by snapshots.
///
/// The RNG that shuffles the deck is captured separately by the encounter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FateDeckState {
    /// Remaining draw pile, next card first.
    pub draw_pile: Vec<FateCard>,
    /// Drawn cards, oldest first.
    pub discard: Vec<FateCard>,
}

/// Draw pile plus discard pile of fate cards.
///
/// When the draw pile runs out, the discard is shuffled back in with the
/// caller's RNG, so the draw order is fully determined by the RNG state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FateDeck {
    draw_pile: VecDeque<FateCard>,
    discard: Vec<FateCard>,
}

impl FateDeck {
    /// Modifiers present once per keyword in the keyword deck.
    const KEYWORD_MODIFIERS: [i32; 4] = [-1, 0, 1, 2];

    /// `(modifier, copies)` of the basic deck.
    const BASIC_DISTRIBUTION: [(i32, usize); 5] = [(-2, 2), (-1, 4), (0, 8), (1, 4), (2, 2)];

    /// Builds a deck from an explicit composition and shuffles it.
    pub fn new(cards: Vec<FateCard>, rng: &mut DeterministicRng) -> Self {
        let mut cards = cards;
        rng.shuffle(&mut cards);
        Self {
            draw_pile: cards.into(),
            discard: Vec::new(),
        }
    }

    /// Builds and shuffles the deck of the given kind.
    pub fn of_kind(kind: FateDeckKind, rng: &mut DeterministicRng) -> Self {
        let cards = match kind {
            FateDeckKind::Basic => Self::basic_composition(),
            FateDeckKind::Keyword => Self::keyword_composition(),
        };
        Self::new(cards, rng)
    }

    /// Five keywords × four modifiers, twenty cards.
    pub fn keyword_composition() -> Vec<FateCard> {
        FateKeyword::iter()
            .flat_map(|keyword| {
                Self::KEYWORD_MODIFIERS
                    .iter()
                    .map(move |&modifier| FateCard::keyword(modifier, keyword))
            })
            .collect()
    }

    /// Twenty numeric cards centred on zero.
    pub fn basic_composition() -> Vec<FateCard> {
        Self::BASIC_DISTRIBUTION
            .iter()
            .flat_map(|&(modifier, copies)| {
                core::iter::repeat_n(FateCard::numeric(modifier), copies)
            })
            .collect()
    }

    pub fn from_state(state: FateDeckState) -> Self {
        Self {
            draw_pile: state.draw_pile.into(),
            discard: state.discard,
        }
    }

    pub fn state(&self) -> FateDeckState {
        FateDeckState {
            draw_pile: self.draw_pile.iter().copied().collect(),
            discard: self.discard.clone(),
        }
    }

    /// Draws the next card, reshuffling the discard if the draw pile is empty.
    ///
    /// Returns `None` only for a deck with no cards at all.
    pub fn draw(&mut self, rng: &mut DeterministicRng) -> Option<FateCard> {
        if self.draw_pile.is_empty() {
            self.reshuffle(rng);
        }
        let card = self.draw_pile.pop_front()?;
        self.discard.push(card);
        Some(card)
    }

    fn reshuffle(&mut self, rng: &mut DeterministicRng) {
        if self.discard.is_empty() {
            return;
        }
        let mut cards = core::mem::take(&mut self.discard);
        rng.shuffle(&mut cards);
        self.draw_pile.extend(cards);
    }

    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discarded(&self) -> usize {
        self.discard.len()
    }

    pub fn len(&self) -> usize {
        self.remaining() + self.discarded()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
