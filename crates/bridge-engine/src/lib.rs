//! Opening bid engine for a single pass around the table.
//!
//! Each seat runs [`Engine::evaluate`], a pure transition over
//! [`OpeningState`]. [`Player`] keeps one seat's state and last call, and
//! [`opening_round`] drives all four seats from the dealer.

pub mod engine;
pub mod player;
pub mod round;
pub mod rules;
pub mod schema;

pub use engine::{Engine, OpeningState, Transition};
pub use player::Player;
pub use round::{opening_round, SeatOpening};
pub use rules::{OpeningRule, RuleRegistry};
pub use schema::{ConfigError, DiamondComparison, NoTrumpMetric, OpeningConfig, OPENING_RULES_YAML};
