//! One-level openings, checked in the order 1NT, 1S, 1H, 1D, 1C.
//!
//! The engine has already ruled out hands outside the opening range before
//! any of these run.

use crate::rules::OpeningRule;
use crate::schema::{DiamondComparison, NoTrumpMetric, OpeningConfig};
use bridge_core::{Call, Hand, Strain, Suit};

/// Equal minors open 1D only from this length up.
const EQUAL_MINOR_MIN_LENGTH: u8 = 4;

fn one(strain: Strain) -> Call {
    Call::bid(1, strain)
}

pub struct OneNoTrump;
impl OpeningRule for OneNoTrump {
    fn name(&self) -> &'static str {
        "1NT Opening"
    }

    fn call(&self, hand: &Hand, config: &OpeningConfig) -> Option<Call> {
        let points = config.no_trump_metric.points(hand);
        let in_window = (config.no_trump_min..=config.no_trump_max).contains(&points);
        if in_window && config.is_no_trump_pattern(&hand.shape_pattern()) {
            Some(one(Strain::NoTrump))
        } else {
            None
        }
    }
}

pub struct OneSpade;
impl OpeningRule for OneSpade {
    fn name(&self) -> &'static str {
        "1S Opening"
    }

    fn call(&self, hand: &Hand, config: &OpeningConfig) -> Option<Call> {
        let spades = hand.length(Suit::Spades);
        (spades >= config.major_min_length && spades == hand.longest_suit_length())
            .then(|| one(Strain::Spades))
    }
}

pub struct OneHeart;
impl OpeningRule for OneHeart {
    fn name(&self) -> &'static str {
        "1H Opening"
    }

    fn call(&self, hand: &Hand, config: &OpeningConfig) -> Option<Call> {
        let hearts = hand.length(Suit::Hearts);
        let spades = hand.length(Suit::Spades);
        let long_enough = hearts >= config.major_min_length;
        (long_enough && (hearts == hand.longest_suit_length() || hearts > spades))
            .then(|| one(Strain::Hearts))
    }
}

pub struct OneDiamond;
impl OpeningRule for OneDiamond {
    fn name(&self) -> &'static str {
        "1D Opening"
    }

    fn call(&self, hand: &Hand, config: &OpeningConfig) -> Option<Call> {
        let diamonds = hand.length(Suit::Diamonds);
        let against = match config.diamond_comparison {
            DiamondComparison::Diamonds => diamonds,
            DiamondComparison::Clubs => hand.length(Suit::Clubs),
        };
        let wins = diamonds > against || (diamonds == against && diamonds >= EQUAL_MINOR_MIN_LENGTH);
        wins.then(|| one(Strain::Diamonds))
    }
}

pub struct OneClub;
impl OpeningRule for OneClub {
    fn name(&self) -> &'static str {
        "1C Opening"
    }

    fn call(&self, _hand: &Hand, _config: &OpeningConfig) -> Option<Call> {
        Some(one(Strain::Clubs))
    }
}
