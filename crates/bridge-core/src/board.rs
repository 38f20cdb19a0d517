use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Position {
    #[default]
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::North,
        Position::East,
        Position::South,
        Position::West,
    ];

    /// Next seat clockwise.
    pub fn next(self) -> Self {
        match self {
            Position::North => Position::East,
            Position::East => Position::South,
            Position::South => Position::West,
            Position::West => Position::North,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Position::North => 0,
            Position::East => 1,
            Position::South => 2,
            Position::West => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Position::North => "North",
            Position::East => "East",
            Position::South => "South",
            Position::West => "West",
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Position::North => 'N',
            Position::East => 'E',
            Position::South => 'S',
            Position::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Position::North),
            'E' => Some(Position::East),
            'S' => Some(Position::South),
            'W' => Some(Position::West),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Vulnerability {
    #[default]
    None,
    NS,
    EW,
    #[serde(rename = "all")]
    Both,
}

/// Vulnerability of boards 1 through 16.
const CYCLE: [Vulnerability; 16] = [
    Vulnerability::None, Vulnerability::NS, Vulnerability::EW, Vulnerability::Both,
    Vulnerability::NS, Vulnerability::EW, Vulnerability::Both, Vulnerability::None,
    Vulnerability::EW, Vulnerability::Both, Vulnerability::None, Vulnerability::NS,
    Vulnerability::Both, Vulnerability::None, Vulnerability::NS, Vulnerability::EW,
];

impl Vulnerability {
    pub fn is_vulnerable(self, pos: Position) -> bool {
        match self {
            Vulnerability::None => false,
            Vulnerability::NS => pos == Position::North || pos == Position::South,
            Vulnerability::EW => pos == Position::East || pos == Position::West,
            Vulnerability::Both => true,
        }
    }

    /// Standard duplicate cycle, repeating every 16 boards.
    pub fn from_board_number(board_number: u32) -> Self {
        CYCLE[(board_number.wrapping_sub(1) % 16) as usize]
    }

    pub fn label(self) -> &'static str {
        match self {
            Vulnerability::None => "none",
            Vulnerability::NS => "ns",
            Vulnerability::EW => "ew",
            Vulnerability::Both => "all",
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
