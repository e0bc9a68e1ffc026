//! Scoring configuration
//!
//! Weights and fallbacks are data, not logic: callers may deserialize a
//! different profile, but the defaults below are the published scoring
//! contract.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Weights applied to the three sub-scores when composing the final score
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub quality: Decimal,
    pub additives: Decimal,
    pub organic: Decimal,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            quality: Decimal::new(6, 1),
            additives: Decimal::new(3, 1),
            organic: Decimal::new(1, 1),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,

    /// Grams assumed when the serving size is absent or unparseable.
    /// A documented approximation, roughly one snack-size serving.
    pub fallback_serving_grams: Decimal,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            fallback_serving_grams: Decimal::from(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoringWeights::default();
        assert_eq!(w.quality + w.additives + w.organic, Decimal::ONE);
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"fallback_serving_grams": "50"}"#).unwrap();
        assert_eq!(config.fallback_serving_grams, Decimal::from(50));
        assert_eq!(config.weights.quality, Decimal::new(6, 1));
    }
}
