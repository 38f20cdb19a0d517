use bridge_core::board::Position;
use bridge_core::card::Card;
use bridge_core::error::ParseError;
use bridge_core::io::pbn;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;

#[derive(Debug, Deserialize)]
struct SeatVector {
    position: u8,
    pbn: String,
    hcp: u8,
    length_points: u8,
    valuation: u8,
}

#[derive(Debug, Deserialize)]
struct Expected {
    dealer: String,
    vulnerability: String,
    hands: HashMap<String, SeatVector>,
}

#[derive(Debug, Deserialize)]
struct TestVector {
    name: String,
    pbn: String,
    board: u32,
    #[serde(default)]
    expected: Option<Expected>,
    #[serde(default)]
    error: Option<String>,
}

fn load_vectors() -> Vec<TestVector> {
    let yaml_content =
        fs::read_to_string("../../tests/board/deals.yaml").expect("Failed to read test vectors");
    serde_yaml::from_str(&yaml_content).expect("Failed to parse test vectors")
}

fn position_named(name: &str) -> Position {
    match name {
        "north" => Position::North,
        "east" => Position::East,
        "south" => Position::South,
        "west" => Position::West,
        other => panic!("unknown seat {}", other),
    }
}

fn error_kind(err: &ParseError) -> &'static str {
    match err {
        ParseError::Format(_) => "format",
        ParseError::SuitShape { .. } => "suit_shape",
        ParseError::InvalidOrDuplicateCard { .. } => "duplicate_card",
        ParseError::DeckIncomplete { .. } => "deck_incomplete",
    }
}

#[test]
fn test_deal_vectors() {
    for vector in load_vectors() {
        let result = pbn::parse_deal(&vector.pbn, vector.board);

        if let Some(kind) = &vector.error {
            let err = result.expect_err(&vector.name);
            assert_eq!(error_kind(&err), kind, "{}: wrong error {}", vector.name, err);
            continue;
        }

        let expected = vector
            .expected
            .as_ref()
            .unwrap_or_else(|| panic!("{}: vector has neither expected nor error", vector.name));
        let deal = result.unwrap_or_else(|e| panic!("{}: {}", vector.name, e));

        assert_eq!(deal.dealer.to_string(), expected.dealer, "{}", vector.name);
        assert_eq!(deal.vulnerability.to_string(), expected.vulnerability, "{}", vector.name);
        assert_eq!(deal.board, vector.board);
        assert_eq!(deal.source, vector.pbn);

        for (seat_name, seat) in &expected.hands {
            let hand = deal
                .hand(position_named(seat_name))
                .unwrap_or_else(|| panic!("{}: {} has no hand", vector.name, seat_name));
            assert_eq!(hand.position(), seat.position, "{}: {} position", vector.name, seat_name);
            assert_eq!(hand.to_pbn(), seat.pbn, "{}: {} cards", vector.name, seat_name);
            assert_eq!(hand.hcp(), seat.hcp, "{}: {} hcp", vector.name, seat_name);
            assert_eq!(hand.length_points(), seat.length_points, "{}: {} length", vector.name, seat_name);
            assert_eq!(hand.valuation(), seat.valuation, "{}: {} valuation", vector.name, seat_name);
        }
    }
}

#[test]
fn test_every_valid_deal_holds_the_whole_deck() {
    for vector in load_vectors().into_iter().filter(|v| v.error.is_none()) {
        let deal = pbn::parse_deal(&vector.pbn, vector.board).unwrap();
        let cards: Vec<Card> = deal.cards().collect();
        let distinct: HashSet<Card> = cards.iter().copied().collect();
        let deck: HashSet<Card> = Card::all().collect();
        assert_eq!(cards.len(), 52, "{}", vector.name);
        assert_eq!(distinct, deck, "{}", vector.name);
    }
}

#[test]
fn test_rotation_changes_placement_not_content() {
    let hands = "A65.J4.A764.A983 QJT73.9852.K3.Q7 K82.KQT3.T52.642 94.A76.QJ98.KJT5";
    let north = pbn::parse_deal(&format!("N:{}", hands), 1).unwrap();
    for dealer in ['E', 'S', 'W'] {
        let deal = pbn::parse_deal(&format!("{}:{}", dealer, hands), 1).unwrap();
        let shift = deal.dealer.idx();
        for pos in Position::ALL {
            // The seat that now holds what `pos` held with North dealing.
            let mut moved = pos;
            for _ in 0..shift {
                moved = moved.next();
            }
            let before = north.hand(pos).unwrap();
            let after = deal.hand(moved).unwrap();
            assert_eq!(before.to_pbn(), after.to_pbn());
            assert_eq!(before.valuation(), after.valuation());
            assert_eq!(before.position(), after.position());
        }
    }
}

#[test]
fn test_export_then_reparse_is_stable() {
    for vector in load_vectors().into_iter().filter(|v| v.error.is_none()) {
        let deal = pbn::parse_deal(&vector.pbn, vector.board).unwrap();
        let exported = pbn::export_deal(&deal);
        let reparsed = pbn::parse_deal(&exported, vector.board).unwrap();
        assert_eq!(pbn::export_deal(&reparsed), exported, "{}", vector.name);
        for pos in Position::ALL {
            let a = deal.hand(pos).unwrap();
            let b = reparsed.hand(pos).unwrap();
            assert_eq!(a.to_pbn(), b.to_pbn());
            assert_eq!(a.valuation(), b.valuation());
        }
    }
}

#[test]
fn test_deal_json_shape() {
    let deal = pbn::parse_deal(
        "E:A65.J4.A764.A983 QJT73.9852.K3.Q7 K82.KQT3.T52.642 94.A76.QJ98.KJT5",
        4,
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&deal.to_json().unwrap()).unwrap();
    assert_eq!(json["dealer"], "E");
    assert_eq!(json["vulnerability"], "all");
    assert_eq!(json["board"], 4);
    assert_eq!(json["east"]["position"], 1);
    assert_eq!(json["east"]["spades"], "A65");
    assert_eq!(json["north"]["lengthPoints"], 0);
}
