use crate::rules::RuleRegistry;
use crate::schema::OpeningConfig;
use bridge_core::{bidding_opened, Call, Hand};
use serde::Serialize;
use std::fmt;

/// Where a seat stands in the opening pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum OpeningState {
    /// Still free to open (or pass).
    #[default]
    Ready,
    /// Another seat has already made a non-pass call.
    BiddingOpened,
    /// The hand is stronger than the one-level cascade handles.
    UnknownOpening,
}

impl OpeningState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, OpeningState::Ready)
    }
}

impl fmt::Display for OpeningState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            OpeningState::Ready => "ready",
            OpeningState::BiddingOpened => "bidding opened",
            OpeningState::UnknownOpening => "unknown opening",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of one evaluate event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub state: OpeningState,
    pub call: Option<Call>,
    /// Name of the cascade rule that produced `call`, when one did.
    pub rule: Option<&'static str>,
}

impl Transition {
    fn to(state: OpeningState) -> Self {
        Self {
            state,
            call: None,
            rule: None,
        }
    }
}

pub struct Engine {
    config: OpeningConfig,
    registry: RuleRegistry,
}

impl Engine {
    pub fn new(config: OpeningConfig) -> Self {
        let registry = RuleRegistry::new_opening();
        log::debug!("Opening rules: {}", registry.rule_names().join(", "));
        Self { config, registry }
    }

    pub fn config(&self) -> &OpeningConfig {
        &self.config
    }

    /// Pure transition for one seat. First matching step wins:
    /// terminal state, auction already opened, no hand, too weak,
    /// too strong, then the rule cascade.
    pub fn evaluate(&self, state: OpeningState, hand: Option<&Hand>, history: &[Call]) -> Transition {
        if state.is_terminal() {
            return Transition::to(state);
        }

        if bidding_opened(history) {
            log::debug!("{} -> {}: auction already opened", state, OpeningState::BiddingOpened);
            return Transition::to(OpeningState::BiddingOpened);
        }

        let Some(hand) = hand else {
            log::debug!("no hand shown, staying {}", state);
            return Transition::to(OpeningState::Ready);
        };

        let valuation = hand.valuation();
        if valuation < self.config.min_opening {
            return Transition {
                state: OpeningState::Ready,
                call: Some(Call::Pass),
                rule: None,
            };
        }

        if valuation > self.config.max_opening {
            log::debug!(
                "{} -> {}: valuation {} above {}",
                state,
                OpeningState::UnknownOpening,
                valuation,
                self.config.max_opening
            );
            return Transition::to(OpeningState::UnknownOpening);
        }

        match self.registry.select(hand, &self.config) {
            Some((rule, call)) => {
                log::debug!("{} opens {} ({})", hand.to_pbn(), call.render(), rule);
                Transition {
                    state: OpeningState::Ready,
                    call: Some(call),
                    rule: Some(rule),
                }
            }
            // The club fallback always fires, so this only happens with a
            // registry that lacks it.
            None => Transition::to(OpeningState::Ready),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(OpeningConfig::default())
    }
}
