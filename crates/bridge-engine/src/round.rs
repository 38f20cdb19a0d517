use crate::engine::{Engine, OpeningState};
use crate::player::Player;
use bridge_core::{Auction, Call, Deal, Position};
use serde::Serialize;

/// What one seat did during the opening round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatOpening {
    pub position: Position,
    /// Clockwise number from the dealer, 1-4.
    pub seat: u8,
    pub state: OpeningState,
    pub call: Option<Call>,
}

/// Run each seat once, dealer first, appending every produced call to the
/// auction before the next seat speaks. A seat that produces no call
/// (no hand, or too strong) adds nothing to the history.
pub fn opening_round(deal: &Deal, engine: &Engine) -> (Auction, Vec<SeatOpening>) {
    let mut auction = Auction::new(deal.dealer);
    let mut seats = Vec::with_capacity(4);

    for (i, position) in deal.seats_from_dealer().enumerate() {
        let mut player = Player::new(deal.hand(position).cloned());
        let call = player.bid(engine, &auction.calls);
        if let Some(call) = call {
            auction.add_call(call);
        }
        seats.push(SeatOpening {
            position,
            seat: i as u8 + 1,
            state: player.state(),
            call,
        });
    }

    (auction, seats)
}
