use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Denomination of a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strain {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

impl Strain {
    pub const ALL: [Strain; 5] = [
        Strain::Clubs,
        Strain::Diamonds,
        Strain::Hearts,
        Strain::Spades,
        Strain::NoTrump,
    ];

    pub fn to_char(self) -> char {
        match self {
            Strain::Clubs => 'C',
            Strain::Diamonds => 'D',
            Strain::Hearts => 'H',
            Strain::Spades => 'S',
            Strain::NoTrump => 'N',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Strain::Clubs),
            'D' => Some(Strain::Diamonds),
            'H' => Some(Strain::Hearts),
            'S' => Some(Strain::Spades),
            'N' => Some(Strain::NoTrump),
            _ => None,
        }
    }

    /// Lowercase denomination name: "clubs" ... "no trump".
    pub fn name(self) -> &'static str {
        match self.to_suit() {
            Some(suit) => suit.name(),
            None => "no trump",
        }
    }

    /// Name with only its first letter capitalized ("Spades", "No trump").
    pub fn display_name(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn to_suit(self) -> Option<Suit> {
        match self {
            Strain::Clubs => Some(Suit::Clubs),
            Strain::Diamonds => Some(Suit::Diamonds),
            Strain::Hearts => Some(Suit::Hearts),
            Strain::Spades => Some(Suit::Spades),
            Strain::NoTrump => None,
        }
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strain_parsing() {
        assert_eq!(Strain::from_char('S'), Some(Strain::Spades));
        assert_eq!(Strain::from_char('N'), Some(Strain::NoTrump));
        assert_eq!(Strain::from_char('x'), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Strain::Clubs.display_name(), "Clubs");
        assert_eq!(Strain::Diamonds.display_name(), "Diamonds");
        assert_eq!(Strain::Hearts.display_name(), "Hearts");
        assert_eq!(Strain::Spades.display_name(), "Spades");
        assert_eq!(Strain::NoTrump.display_name(), "No trump");
    }

    #[test]
    fn test_to_suit() {
        assert_eq!(Strain::Hearts.to_suit(), Some(Suit::Hearts));
        assert_eq!(Strain::NoTrump.to_suit(), None);
    }
}
