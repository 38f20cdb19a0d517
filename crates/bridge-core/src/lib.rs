//! Bridge deal model and PBN deal parsing.
//!
//! [`io::pbn::parse_deal`] turns a `D:H H H H` string into a [`Deal`] whose
//! hands are normalized, placed by dealer rotation and valued.

pub mod suit;
pub mod rank;
pub mod strain;
pub mod card;
pub mod hand;
pub mod valuation;
pub mod deck;
pub mod board;
pub mod deal;
pub mod call;
pub mod auction;
pub mod error;
pub mod io;

pub use suit::Suit;
pub use rank::Rank;
pub use strain::Strain;
pub use card::Card;
pub use hand::{Hand, Holding};
pub use valuation::Valuation;
pub use deck::Deck;
pub use board::{Position, Vulnerability};
pub use deal::Deal;
pub use call::Call;
pub use auction::{bidding_opened, Auction};
pub use error::{ParseCallError, ParseError};
pub use io::pbn::parse_deal;
