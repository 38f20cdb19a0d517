use crate::card::Card;
use crate::error::ParseError;
use crate::rank::Rank;
use crate::suit::Suit;
use crate::valuation::Valuation;
use serde::{Serialize, Serializer};
use std::fmt;

/// The cards one hand holds in one suit, highest rank first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Holding {
    ranks: Vec<Rank>,
}

impl Holding {
    /// Builds a holding, normalizing to descending rank order.
    pub fn new(mut ranks: Vec<Rank>) -> Self {
        ranks.sort_by(|a, b| b.cmp(a));
        Self { ranks }
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn hcp(&self) -> u8 {
        self.ranks.iter().map(|r| r.hcp()).sum()
    }
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in &self.ranks {
            write!(f, "{}", rank.to_char())?;
        }
        Ok(())
    }
}

impl Serialize for Holding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One seat's cards with their valuation, fixed at construction.
///
/// `position` is the seat's place in the bidding order, 1 for the dealer
/// through 4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hand {
    position: u8,
    spades: Holding,
    hearts: Holding,
    diamonds: Holding,
    clubs: Holding,
    hcp: u8,
    length_points: u8,
    valuation: u8,
}

impl Hand {
    /// `holdings` are in PBN order: spades, hearts, diamonds, clubs.
    pub fn new(position: u8, holdings: [Holding; 4]) -> Self {
        let points = Valuation::of(&holdings);
        let [spades, hearts, diamonds, clubs] = holdings;
        Self {
            position,
            spades,
            hearts,
            diamonds,
            clubs,
            hcp: points.hcp,
            length_points: points.length_points,
            valuation: points.total(),
        }
    }

    /// Decodes a single PBN hand segment ("AKQ.JT9.876.5432") on its own,
    /// against a fresh deck. The hand is given position 1.
    pub fn from_pbn(segment: &str) -> Result<Self, ParseError> {
        let mut deck = crate::deck::Deck::full();
        crate::io::pbn::decode_hand(segment, &mut deck, 1)?
            .ok_or_else(|| ParseError::Format(format!("no cards shown in '{}'", segment)))
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn holding(&self, suit: Suit) -> &Holding {
        match suit {
            Suit::Spades => &self.spades,
            Suit::Hearts => &self.hearts,
            Suit::Diamonds => &self.diamonds,
            Suit::Clubs => &self.clubs,
        }
    }

    pub fn spades(&self) -> &Holding {
        &self.spades
    }

    pub fn hearts(&self) -> &Holding {
        &self.hearts
    }

    pub fn diamonds(&self) -> &Holding {
        &self.diamonds
    }

    pub fn clubs(&self) -> &Holding {
        &self.clubs
    }

    pub fn hcp(&self) -> u8 {
        self.hcp
    }

    pub fn length_points(&self) -> u8 {
        self.length_points
    }

    pub fn valuation(&self) -> u8 {
        self.valuation
    }

    pub fn length(&self, suit: Suit) -> u8 {
        self.holding(suit).len() as u8
    }

    /// Suit lengths in PBN order.
    pub fn distribution(&self) -> [u8; 4] {
        Suit::ALL.map(|s| self.length(s))
    }

    /// Suit lengths sorted longest first, e.g. "5-3-3-2".
    pub fn shape_pattern(&self) -> String {
        let mut lengths = self.distribution();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        join_lengths(&lengths, "-")
    }

    /// Suit lengths in suit order, e.g. "2=3=3=5".
    pub fn exact_distribution(&self) -> String {
        join_lengths(&self.distribution(), "=")
    }

    pub fn longest_suit_length(&self) -> u8 {
        self.distribution().into_iter().max().unwrap_or(0)
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        Suit::ALL.into_iter().flat_map(move |suit| {
            self.holding(suit)
                .ranks()
                .iter()
                .map(move |&rank| Card::new(suit, rank))
        })
    }

    /// PBN segment for this hand, suits in S.H.D.C order.
    pub fn to_pbn(&self) -> String {
        Suit::ALL
            .iter()
            .map(|&s| self.holding(s).to_string())
            .collect::<Vec<_>>()
            .join(".")
    }
}

fn join_lengths(lengths: &[u8], separator: &str) -> String {
    lengths
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(s: &str) -> Holding {
        Holding::new(s.chars().filter_map(Rank::from_char).collect())
    }

    #[test]
    fn test_holding_sorted_descending() {
        let h = holding("2TA5K");
        assert_eq!(h.to_string(), "AKT52");
        assert_eq!(h.len(), 5);
        assert_eq!(h.ranks()[2], Rank::Ten);
    }

    #[test]
    fn test_void_holding() {
        let h = holding("");
        assert!(h.is_empty());
        assert_eq!(h.to_string(), "");
        assert_eq!(h.hcp(), 0);
    }

    #[test]
    fn test_hcp_calculation() {
        let hand = Hand::new(
            1,
            [holding("A2"), holding("K"), holding("Q"), holding("J")],
        );
        assert_eq!(hand.hcp(), 10);
        assert_eq!(hand.length_points(), 0);
        assert_eq!(hand.valuation(), 10);
    }

    #[test]
    fn test_distribution_and_shape() {
        let hand = Hand::from_pbn("Q2.K32.A32.AKJ32").unwrap();
        assert_eq!(hand.distribution(), [2, 3, 3, 5]);
        assert_eq!(hand.shape_pattern(), "5-3-3-2");
        assert_eq!(hand.exact_distribution(), "2=3=3=5");
        assert_eq!(hand.longest_suit_length(), 5);
        assert_eq!(hand.cards().count(), 13);
    }

    #[test]
    fn test_shape_pattern_sorts_numerically() {
        let hand = Hand::new(
            1,
            [holding("AKQJT98765432"), holding(""), holding(""), holding("")],
        );
        assert_eq!(hand.shape_pattern(), "13-0-0-0");
        assert_eq!(hand.length_points(), 3);
    }

    #[test]
    fn test_from_pbn_normalizes() {
        let hand = Hand::from_pbn("56A.4J.467A.389A").unwrap();
        assert_eq!(hand.spades().to_string(), "A65");
        assert_eq!(hand.hearts().to_string(), "J4");
        assert_eq!(hand.diamonds().to_string(), "A764");
        assert_eq!(hand.clubs().to_string(), "A983");
        assert_eq!(hand.to_pbn(), "A65.J4.A764.A983");
        assert_eq!(hand.position(), 1);
        assert_eq!(hand.hcp(), 13);
    }

    #[test]
    fn test_from_pbn_rejects_duplicates_and_markers() {
        assert!(matches!(
            Hand::from_pbn("AA2.K32.Q32.J432"),
            Err(ParseError::InvalidOrDuplicateCard { suit: Suit::Spades, card: 'A' })
        ));
        assert!(matches!(Hand::from_pbn("-"), Err(ParseError::Format(_))));
        assert!(matches!(
            Hand::from_pbn("AK2.K32.Q32"),
            Err(ParseError::SuitShape { found: 3, .. })
        ));
    }

    #[test]
    fn test_cards_iterates_every_card() {
        let hand = Hand::from_pbn("AKQ2.K32.Q32.Q32").unwrap();
        let cards: Vec<Card> = hand.cards().collect();
        assert_eq!(cards.len(), 13);
        assert_eq!(cards[0], Card::new(Suit::Spades, Rank::Ace));
        assert_eq!(cards[12], Card::new(Suit::Clubs, Rank::Two));
    }

    #[test]
    fn test_serialized_shape() {
        let hand = Hand::from_pbn("AKJ32.K32.Q2.Q32").unwrap();
        let json = serde_json::to_value(&hand).unwrap();
        assert_eq!(json["position"], 1);
        assert_eq!(json["spades"], "AKJ32");
        assert_eq!(json["clubs"], "Q32");
        assert_eq!(json["hcp"], 15);
        assert_eq!(json["lengthPoints"], 1);
        assert_eq!(json["valuation"], 16);
    }
}
