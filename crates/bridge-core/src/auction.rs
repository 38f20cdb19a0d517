use crate::board::Position;
use crate::call::Call;
use serde::{Deserialize, Serialize};

/// True once any call other than pass has been made.
pub fn bidding_opened(calls: &[Call]) -> bool {
    calls.iter().any(|c| !c.is_pass())
}

/// Append-only call history, first call by the dealer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Auction {
    pub dealer: Position,
    pub calls: Vec<Call>,
}

impl Auction {
    pub fn new(dealer: Position) -> Self {
        Self {
            dealer,
            calls: Vec::new(),
        }
    }

    pub fn add_call(&mut self, call: Call) {
        self.calls.push(call);
    }

    /// Build an auction from space-separated calls like "P P 1C".
    pub fn bidding(dealer: Position, calls: &str) -> Result<Self, crate::error::ParseCallError> {
        let mut auction = Self::new(dealer);
        for token in calls.split_whitespace() {
            auction.add_call(token.parse()?);
        }
        Ok(auction)
    }

    pub fn is_open(&self) -> bool {
        bidding_opened(&self.calls)
    }
}
