use crate::engine::{Engine, OpeningState};
use bridge_core::{Call, Hand};

/// One seat's opening decision: the hand it holds, where it stands in the
/// opening pass, and the last call it produced.
#[derive(Debug, Clone)]
pub struct Player {
    hand: Option<Hand>,
    state: OpeningState,
    last_bid: Option<Call>,
}

impl Player {
    pub fn new(hand: Option<Hand>) -> Self {
        Self {
            hand,
            state: OpeningState::Ready,
            last_bid: None,
        }
    }

    /// Feed one evaluate event through the engine and keep its outcome.
    pub fn bid(&mut self, engine: &Engine, history: &[Call]) -> Option<Call> {
        let transition = engine.evaluate(self.state, self.hand.as_ref(), history);
        self.state = transition.state;
        self.last_bid = transition.call;
        self.last_bid
    }

    pub fn last_bid(&self) -> Option<Call> {
        self.last_bid
    }

    /// "pass", "1 Hearts", "1 No trump", or empty when nothing is set.
    pub fn last_bid_display(&self) -> String {
        self.last_bid.map(|c| c.to_string()).unwrap_or_default()
    }

    pub fn state(&self) -> OpeningState {
        self.state
    }

    pub fn distribution(&self) -> Option<String> {
        self.hand.as_ref().map(Hand::shape_pattern)
    }

    pub fn exact_distribution(&self) -> Option<String> {
        self.hand.as_ref().map(Hand::exact_distribution)
    }
}
