//! The one-level opening cascade.

use crate::schema::OpeningConfig;
use bridge_core::{Call, Hand};

pub mod opening;
pub mod registry;

pub use registry::RuleRegistry;

/// One step of the cascade. A rule is a pure test of the hand: it either
/// names the call it would make or declines.
pub trait OpeningRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn call(&self, hand: &Hand, config: &OpeningConfig) -> Option<Call>;
}
