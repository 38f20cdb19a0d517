//! Point count for a single hand: high card points plus length points.

use crate::hand::Holding;
use serde::Serialize;

/// Suits longer than this earn one length point per extra card.
pub const LENGTH_POINT_THRESHOLD: usize = 4;

/// Cap on length points from any one suit.
pub const MAX_LENGTH_POINTS_PER_SUIT: u8 = 3;

/// `max(0, min(len - 4, 3))`
pub fn suit_length_points(len: usize) -> u8 {
    let extra = len.saturating_sub(LENGTH_POINT_THRESHOLD);
    extra.min(MAX_LENGTH_POINTS_PER_SUIT as usize) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    pub hcp: u8,
    pub length_points: u8,
}

impl Valuation {
    pub fn of(holdings: &[Holding]) -> Self {
        Self {
            hcp: holdings.iter().map(Holding::hcp).sum(),
            length_points: holdings.iter().map(|h| suit_length_points(h.len())).sum(),
        }
    }

    pub fn total(self) -> u8 {
        self.hcp + self.length_points
    }
}
