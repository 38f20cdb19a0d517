use crate::error::ParseCallError;
use crate::strain::Strain;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A call in the auction. Only the opening vocabulary is modelled: pass or
/// a bid of some level in some strain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Call {
    Pass,
    Bid { level: u8, strain: Strain },
}

impl Call {
    pub fn bid(level: u8, strain: Strain) -> Self {
        Call::Bid { level, strain }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Call::Pass)
    }

    /// Compact notation: "P", "1C", "1N".
    pub fn render(self) -> String {
        match self {
            Call::Pass => "P".to_string(),
            Call::Bid { level, strain } => format!("{}{}", level, strain.to_char()),
        }
    }
}

impl FromStr for Call {
    type Err = ParseCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper == "P" || upper == "PASS" {
            return Ok(Call::Pass);
        }
        let mut chars = upper.chars();
        let level = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
            .filter(|l| (1..=7).contains(l))
            .ok_or_else(|| ParseCallError(s.to_string()))?;
        let strain = chars
            .next()
            .and_then(Strain::from_char)
            .ok_or_else(|| ParseCallError(s.to_string()))?;
        // Allow "1NT" as well as "1N".
        let rest: String = chars.collect();
        if !(rest.is_empty() || (strain == Strain::NoTrump && rest == "T")) {
            return Err(ParseCallError(s.to_string()));
        }
        Ok(Call::Bid { level, strain })
    }
}

/// Human display form: "pass", or "<level> <Strain>" such as "1 No trump".
impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Call::Pass => write!(f, "pass"),
            Call::Bid { level, strain } => write!(f, "{} {}", level, strain.display_name()),
        }
    }
}
