use crate::rules::{opening, OpeningRule};
use crate::schema::OpeningConfig;
use bridge_core::{Call, Hand};

/// Opening rules in priority order; the first that fires decides the call.
pub struct RuleRegistry {
    rules: Vec<Box<dyn OpeningRule>>,
}

impl RuleRegistry {
    pub fn new_opening() -> Self {
        let rules: Vec<Box<dyn OpeningRule>> = vec![
            Box::new(opening::OneNoTrump),
            Box::new(opening::OneSpade),
            Box::new(opening::OneHeart),
            Box::new(opening::OneDiamond),
            Box::new(opening::OneClub),
        ];
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// First matching rule and its call.
    pub fn select(&self, hand: &Hand, config: &OpeningConfig) -> Option<(&'static str, Call)> {
        self.rules.iter().find_map(|rule| {
            let call = rule.call(hand, config)?;
            log::trace!("{} matched for {}", rule.name(), hand.to_pbn());
            Some((rule.name(), call))
        })
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new_opening()
    }
}
