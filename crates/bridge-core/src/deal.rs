use crate::board::{Position, Vulnerability};
use crate::card::Card;
use crate::hand::Hand;
use serde::Serialize;

/// A parsed board: the four seats' hands plus dealer and vulnerability.
///
/// Produced by [`crate::io::pbn::parse_deal`]; a seat with no cards shown
/// holds `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deal {
    pub source: String,
    pub board: u32,
    pub dealer: Position,
    pub vulnerability: Vulnerability,
    pub north: Option<Hand>,
    pub east: Option<Hand>,
    pub south: Option<Hand>,
    pub west: Option<Hand>,
}

impl Deal {
    pub fn hand(&self, pos: Position) -> Option<&Hand> {
        match pos {
            Position::North => self.north.as_ref(),
            Position::East => self.east.as_ref(),
            Position::South => self.south.as_ref(),
            Position::West => self.west.as_ref(),
        }
    }

    /// Seats in bidding order, starting with the dealer.
    pub fn seats_from_dealer(&self) -> impl Iterator<Item = Position> {
        let mut pos = self.dealer;
        (0..4).map(move |_| {
            let current = pos;
            pos = pos.next();
            current
        })
    }

    /// Every card held by any seat.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(move |pos| self.hand(pos))
            .flat_map(|hand| hand.cards())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
