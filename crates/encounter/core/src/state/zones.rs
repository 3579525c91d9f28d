//! Card zones.
//!
//! A card sits in exactly one of hand, discard, or exhaust. Exhaust is a sink:
//! nothing ever leaves it during an encounter.

use super::card::{Card, CardId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardZones {
    hand: Vec<Card>,
    discard: Vec<Card>,
    exhaust: Vec<Card>,
}

impl CardZones {
    pub fn new(hand: Vec<Card>) -> Self {
        Self {
            hand,
            discard: Vec::new(),
            exhaust: Vec::new(),
        }
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    pub fn exhaust(&self) -> &[Card] {
        &self.exhaust
    }

    /// Total number of cards across all zones.
    pub fn total(&self) -> usize {
        self.hand.len() + self.discard.len() + self.exhaust.len()
    }

    pub fn find_in_hand(&self, id: CardId) -> Option<&Card> {
        self.hand.iter().find(|card| card.id == id)
    }

    /// Moves a card from hand to discard.
    pub(crate) fn discard_from_hand(&mut self, id: CardId) -> Option<Card> {
        let card = self.take_from_hand(id)?;
        self.discard.push(card.clone());
        Some(card)
    }

    /// Moves a card from hand to exhaust.
    pub(crate) fn exhaust_from_hand(&mut self, id: CardId) -> Option<Card> {
        let card = self.take_from_hand(id)?;
        self.exhaust.push(card.clone());
        Some(card)
    }

    /// Moves the card at `index` in hand to exhaust.
    pub(crate) fn exhaust_hand_index(&mut self, index: usize) -> Option<Card> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        self.exhaust.push(card.clone());
        Some(card)
    }

    /// Returns the whole discard pile to hand, preserving discard order.
    ///
    /// Returns the number of cards recycled.
    pub(crate) fn recycle_discard(&mut self) -> usize {
        let count = self.discard.len();
        self.hand.append(&mut self.discard);
        count
    }

    fn take_from_hand(&mut self, id: CardId) -> Option<Card> {
        let index = self.hand.iter().position(|card| card.id == id)?;
        Some(self.hand.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CardKind;

    fn zones() -> CardZones {
        CardZones::new(vec![
            Card::new(1, 5, 1, CardKind::Combat),
            Card::new(2, 4, 1, CardKind::Spiritual),
            Card::new(3, 3, 0, CardKind::Utility),
        ])
    }

    #[test]
    fn moves_preserve_total() {
        let mut zones = zones();
        assert_eq!(zones.total(), 3);

        assert!(zones.discard_from_hand(CardId(1)).is_some());
        assert_eq!(zones.total(), 3);
        assert_eq!(zones.discard().len(), 1);

        assert!(zones.exhaust_from_hand(CardId(2)).is_some());
        assert_eq!(zones.total(), 3);
        assert_eq!(zones.exhaust().len(), 1);
        assert_eq!(zones.hand().len(), 1);
    }

    #[test]
    fn missing_card_is_not_moved() {
        let mut zones = zones();
        assert!(zones.discard_from_hand(CardId(9)).is_none());
        assert!(zones.exhaust_hand_index(3).is_none());
        assert_eq!(zones, self::zones());
    }

    #[test]
    fn recycle_returns_discard_but_never_exhaust() {
        let mut zones = zones();
        zones.discard_from_hand(CardId(1));
        zones.exhaust_from_hand(CardId(2));
        zones.discard_from_hand(CardId(3));

        assert_eq!(zones.recycle_discard(), 2);
        let ids: Vec<CardId> = zones.hand().iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![CardId(1), CardId(3)]);
        assert!(zones.discard().is_empty());
        assert_eq!(zones.exhaust().len(), 1);
    }
}
