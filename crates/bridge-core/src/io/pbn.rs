//! PBN deal strings: `D:H H H H`.
//!
//! `D` is the dealer and each `H` is one hand written as four
//! `.`-separated suits in spade, heart, diamond, club order. The first hand
//! in the string belongs to the dealer and the rest follow clockwise.

use crate::board::{Position, Vulnerability};
use crate::card::Card;
use crate::deal::Deal;
use crate::deck::Deck;
use crate::error::ParseError;
use crate::hand::{Hand, Holding};
use crate::rank::Rank;
use crate::suit::Suit;
use once_cell::sync::Lazy;
use regex::Regex;

/// Segment meaning "this seat's cards are not shown".
pub const NO_CARDS: &str = "-";

static DEAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([NESW]):([2-9AKQJT.]{16}) ([2-9AKQJT.]{16}) ([2-9AKQJT.]{16}) ([2-9AKQJT.]{16})$",
    )
    .expect("deal grammar is a valid regex")
});

/// Parses a deal string into a fully validated [`Deal`].
///
/// Every card of the deck must appear exactly once across the four hands.
/// Suits are re-emitted in descending rank order regardless of input order.
/// On any error nothing is returned but the error.
pub fn parse_deal(pbn: &str, board_number: u32) -> Result<Deal, ParseError> {
    let result = try_parse_deal(pbn, board_number);
    if let Err(e) = &result {
        log::debug!("Rejected deal '{}': {}", pbn, e);
    }
    result
}

fn try_parse_deal(pbn: &str, board_number: u32) -> Result<Deal, ParseError> {
    let caps = DEAL_RE
        .captures(pbn)
        .ok_or_else(|| ParseError::Format(format!("'{}' does not match D:H H H H", pbn)))?;

    let dealer = caps
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Position::from_char)
        .ok_or_else(|| ParseError::Format(format!("missing dealer in '{}'", pbn)))?;

    let mut segments = [""; 4];
    for (i, segment) in segments.iter_mut().enumerate() {
        *segment = caps
            .get(i + 2)
            .map(|m| m.as_str())
            .ok_or_else(|| ParseError::Format(format!("missing hand {} in '{}'", i + 1, pbn)))?;
    }

    let [north, east, south, west] = decode_seats(dealer, segments)?;

    Ok(Deal {
        source: pbn.to_string(),
        board: board_number,
        dealer,
        vulnerability: Vulnerability::from_board_number(board_number),
        north,
        east,
        south,
        west,
    })
}

/// Moves the first segment, which is the dealer's, into the dealer's
/// compass slot and the rest clockwise after it. Slots 0 through 3 are
/// north, east, south, west.
fn rotate(dealer: Position, segments: [&str; 4]) -> [&str; 4] {
    let mut rotated = segments;
    rotated.rotate_right(dealer.idx());
    rotated
}

/// Decodes the four segments against one shared deck and checks that the
/// deck is exhausted afterwards.
fn decode_seats(dealer: Position, segments: [&str; 4]) -> Result<[Option<Hand>; 4], ParseError> {
    let rotated = rotate(dealer, segments);
    let mut deck = Deck::full();
    let mut hands: [Option<Hand>; 4] = Default::default();

    // Position counter starts where the rotation leaves the dealer and wraps.
    let mut counter = (4 - dealer.idx()) % 4;
    for (slot, segment) in rotated.iter().enumerate() {
        hands[slot] = decode_hand(segment, &mut deck, counter as u8 + 1)?;
        counter = (counter + 1) % 4;
    }

    if !deck.is_empty() {
        log::trace!(
            "Undealt cards: {:?}",
            deck.remaining_cards().map(|c| c.to_string()).collect::<Vec<_>>()
        );
        return Err(ParseError::DeckIncomplete {
            remaining: deck.remaining(),
        });
    }

    Ok(hands)
}

/// Decodes one hand segment, removing each card from `deck`.
///
/// Returns `Ok(None)` for the no-cards marker `-`.
pub fn decode_hand(
    segment: &str,
    deck: &mut Deck,
    position: u8,
) -> Result<Option<Hand>, ParseError> {
    if segment == NO_CARDS {
        return Ok(None);
    }

    let suits: Vec<&str> = segment.split('.').collect();
    if suits.len() != 4 {
        return Err(ParseError::SuitShape {
            segment: segment.to_string(),
            found: suits.len(),
        });
    }

    let mut holdings: [Holding; 4] = Default::default();
    for (holding, (suit, text)) in holdings.iter_mut().zip(Suit::ALL.iter().zip(&suits)) {
        *holding = decode_holding(*suit, text, deck)?;
    }

    Ok(Some(Hand::new(position, holdings)))
}

fn decode_holding(suit: Suit, text: &str, deck: &mut Deck) -> Result<Holding, ParseError> {
    let mut ranks = Vec::with_capacity(text.len());
    for c in text.chars() {
        let rank = Rank::from_char(c);
        match rank {
            Some(rank) if deck.take(Card::new(suit, rank)) => ranks.push(rank),
            _ => return Err(ParseError::InvalidOrDuplicateCard { suit, card: c }),
        }
    }
    Ok(Holding::new(ranks))
}

/// Segment for one seat; `-` when no hand is shown.
pub fn export_hand(hand: Option<&Hand>) -> String {
    match hand {
        Some(hand) => hand.to_pbn(),
        None => NO_CARDS.to_string(),
    }
}

/// Writes a deal back out as `N:` followed by the north, east, south and
/// west segments in normalized order.
pub fn export_deal(deal: &Deal) -> String {
    let hands: Vec<String> = Position::ALL
        .iter()
        .map(|&pos| export_hand(deal.hand(pos)))
        .collect();
    format!("N:{}", hands.join(" "))
}
