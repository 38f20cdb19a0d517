use bridge_core::Hand;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bundled copy of the default cascade thresholds.
pub const OPENING_RULES_YAML: &str = include_str!("rules/opening.yaml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse opening rules: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid range {name}: {min} > {max}")]
    InvalidRange { name: &'static str, min: u8, max: u8 },

    #[error("1NT window {min}-{max} lies outside the opening range")]
    NoTrumpOutsideOpening { min: u8, max: u8 },

    #[error("Invalid shape pattern: {0}")]
    InvalidPattern(String),
}

/// Which length the 1D rule compares diamonds against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiamondComparison {
    /// Diamonds against diamonds: 1D whenever diamonds are four or longer.
    #[default]
    Diamonds,
    /// Diamonds against clubs.
    Clubs,
}

/// Which point count the 1NT window is measured on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoTrumpMetric {
    #[default]
    Hcp,
    /// HCP plus length points, the same count the opening range uses.
    Valuation,
}

impl NoTrumpMetric {
    pub fn points(self, hand: &Hand) -> u8 {
        match self {
            NoTrumpMetric::Hcp => hand.hcp(),
            NoTrumpMetric::Valuation => hand.valuation(),
        }
    }
}

/// Thresholds of the opening cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningConfig {
    pub min_opening: u8,
    pub max_opening: u8,
    pub no_trump_metric: NoTrumpMetric,
    pub no_trump_min: u8,
    pub no_trump_max: u8,
    pub no_trump_patterns: Vec<String>,
    pub major_min_length: u8,
    pub diamond_comparison: DiamondComparison,
}

impl Default for OpeningConfig {
    fn default() -> Self {
        Self {
            min_opening: 13,
            max_opening: 21,
            no_trump_metric: NoTrumpMetric::Hcp,
            no_trump_min: 15,
            no_trump_max: 17,
            no_trump_patterns: vec!["4-3-3-3".into(), "4-4-3-2".into(), "5-3-3-2".into()],
            major_min_length: 5,
            diamond_comparison: DiamondComparison::Diamonds,
        }
    }
}

impl OpeningConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: OpeningConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_opening > self.max_opening {
            return Err(ConfigError::InvalidRange {
                name: "opening",
                min: self.min_opening,
                max: self.max_opening,
            });
        }
        if self.no_trump_min > self.no_trump_max {
            return Err(ConfigError::InvalidRange {
                name: "no_trump",
                min: self.no_trump_min,
                max: self.no_trump_max,
            });
        }
        if self.no_trump_min < self.min_opening || self.no_trump_max > self.max_opening {
            return Err(ConfigError::NoTrumpOutsideOpening {
                min: self.no_trump_min,
                max: self.no_trump_max,
            });
        }
        for pattern in &self.no_trump_patterns {
            validate_pattern(pattern)?;
        }
        Ok(())
    }

    pub fn is_no_trump_pattern(&self, pattern: &str) -> bool {
        self.no_trump_patterns.iter().any(|p| p == pattern)
    }
}

/// A pattern is four lengths, longest first, summing to 13.
fn validate_pattern(pattern: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidPattern(pattern.to_string());
    let lengths = pattern
        .split('-')
        .map(|part| part.parse::<u8>().map_err(|_| invalid()))
        .collect::<Result<Vec<u8>, _>>()?;
    let descending = lengths.windows(2).all(|w| w[0] >= w[1]);
    let total: u32 = lengths.iter().map(|&l| l as u32).sum();
    if lengths.len() != 4 || !descending || total != 13 {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_rules_match_default() {
        let config = OpeningConfig::from_yaml(OPENING_RULES_YAML).expect("bundled rules parse");
        assert_eq!(config, OpeningConfig::default());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config = OpeningConfig::from_yaml("diamond_comparison: clubs\n").unwrap();
        assert_eq!(config.diamond_comparison, DiamondComparison::Clubs);
        assert_eq!(config.min_opening, 13);
        assert_eq!(config.no_trump_patterns.len(), 3);
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let err = OpeningConfig::from_yaml("min_opening: 22\nmax_opening: 21\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { name: "opening", .. }));

        let err = OpeningConfig::from_yaml("no_trump_min: 18\nno_trump_max: 16\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { name: "no_trump", .. }));

        let err = OpeningConfig::from_yaml("no_trump_max: 23\n").unwrap_err();
        assert!(matches!(err, ConfigError::NoTrumpOutsideOpening { .. }));
    }

    #[test]
    fn test_rejects_bad_patterns() {
        for bad in ["4-3-3", "3-4-3-3", "4-4-4-2", "a-3-3-3"] {
            let config = OpeningConfig {
                no_trump_patterns: vec![bad.to_string()],
                ..OpeningConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidPattern(_))),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = OpeningConfig::from_yaml("min_opening: [").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_no_trump_metric() {
        assert_eq!(OpeningConfig::default().no_trump_metric, NoTrumpMetric::Hcp);
        let config = OpeningConfig::from_yaml("no_trump_metric: valuation\n").unwrap();
        assert_eq!(config.no_trump_metric, NoTrumpMetric::Valuation);
        assert!(OpeningConfig::from_yaml("no_trump_metric: losers\n").is_err());

        // 14 HCP plus one length point
        let hand = Hand::from_pbn("AQ432.K32.Q2.K32").unwrap();
        assert_eq!(NoTrumpMetric::Hcp.points(&hand), 14);
        assert_eq!(NoTrumpMetric::Valuation.points(&hand), 15);
    }

    #[test]
    fn test_pattern_lookup() {
        let config = OpeningConfig::default();
        assert!(config.is_no_trump_pattern("5-3-3-2"));
        assert!(!config.is_no_trump_pattern("5-4-2-2"));
    }
}
