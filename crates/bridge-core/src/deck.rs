use crate::card::Card;
use crate::rank::Rank;
use crate::suit::Suit;

const FULL_SUIT: u16 = 0x1FFF;

/// Cards not yet dealt, one 13-bit rank mask per suit (PBN suit order).
///
/// A parse owns one of these for its whole duration and drops it when done;
/// nothing about it is shared between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    remaining: [u16; 4],
}

impl Deck {
    pub fn full() -> Self {
        Self {
            remaining: [FULL_SUIT; 4],
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.remaining[card.suit.idx()] & card.rank.bit() != 0
    }

    /// Removes `card`. Returns false if it was already dealt.
    pub fn take(&mut self, card: Card) -> bool {
        if !self.contains(card) {
            return false;
        }
        self.remaining[card.suit.idx()] &= !card.rank.bit();
        true
    }

    pub fn remaining(&self) -> usize {
        self.remaining.iter().map(|m| m.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.iter().all(|&m| m == 0)
    }

    pub fn remaining_cards(&self) -> impl Iterator<Item = Card> + '_ {
        Suit::ALL.into_iter().flat_map(move |suit| {
            Rank::ALL
                .into_iter()
                .map(move |rank| Card::new(suit, rank))
                .filter(move |card| self.contains(*card))
        })
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::full()
    }
}
