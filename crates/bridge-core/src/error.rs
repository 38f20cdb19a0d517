use crate::suit::Suit;
use thiserror::Error;

/// Why a deal string was rejected. Any of these means no `Deal` was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid deal notation: {0}")]
    Format(String),

    #[error("Expected 4 suits separated by '.', got {found} in '{segment}'")]
    SuitShape { segment: String, found: usize },

    #[error("Invalid or duplicate card '{card}' in {suit:?}")]
    InvalidOrDuplicateCard { suit: Suit, card: char },

    #[error("Deck incomplete: {remaining} cards were not dealt")]
    DeckIncomplete { remaining: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid call: {0}")]
pub struct ParseCallError(pub String);
