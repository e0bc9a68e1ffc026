//! Nutritional quality sub-score
//!
//! Starts from a perfect 100, subtracts banded penalties for the four
//! negative nutrients (calories, saturated fat, sugars, sodium) and adds
//! banded bonuses for the two positive ones (dietary fiber, protein),
//! all on a per-100g basis. Absent readings contribute nothing: unknown
//! data is never penalized.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;
use shared::{validate_serving_grams, NutritionFacts};

use crate::config::ScoringConfig;

/// Penalty/bonus band: value must exceed the threshold to earn the points
type Band = (Decimal, u8);

/// kcal per 100g
fn calorie_bands() -> [Band; 5] {
    [
        (Decimal::from(800), 10),
        (Decimal::from(640), 8),
        (Decimal::from(480), 6),
        (Decimal::from(320), 4),
        (Decimal::from(160), 2),
    ]
}

/// Grams per 100g
fn saturated_fat_bands() -> [Band; 5] {
    [
        (Decimal::from(10), 10),
        (Decimal::from(8), 8),
        (Decimal::from(6), 6),
        (Decimal::from(4), 4),
        (Decimal::from(2), 2),
    ]
}

/// Grams per 100g
fn sugar_bands() -> [Band; 5] {
    [
        (Decimal::from(45), 10),
        (Decimal::from(36), 8),
        (Decimal::from(27), 6),
        (Decimal::from(18), 4),
        (Decimal::from(9), 2),
    ]
}

/// Milligrams per 100g
fn sodium_bands() -> [Band; 5] {
    [
        (Decimal::from(900), 10),
        (Decimal::from(720), 8),
        (Decimal::from(540), 6),
        (Decimal::from(360), 4),
        (Decimal::from(180), 2),
    ]
}

/// Grams per 100g
fn fiber_bands() -> [Band; 5] {
    [
        (Decimal::new(47, 1), 5),
        (Decimal::new(37, 1), 4),
        (Decimal::new(28, 1), 3),
        (Decimal::new(19, 1), 2),
        (Decimal::new(9, 1), 1),
    ]
}

/// Grams per 100g
fn protein_bands() -> [Band; 5] {
    [
        (Decimal::new(80, 1), 5),
        (Decimal::new(64, 1), 4),
        (Decimal::new(48, 1), 3),
        (Decimal::new(32, 1), 2),
        (Decimal::new(16, 1), 1),
    ]
}

fn band_points(per_100g: Decimal, bands: &[Band]) -> u8 {
    bands
        .iter()
        .find(|(threshold, _)| per_100g > *threshold)
        .map_or(0, |(_, points)| *points)
}

/// Computes the nutritional quality sub-score in [0, 100]
#[derive(Clone)]
pub struct QualityCalculator {
    serving_re: Regex,
    fallback_grams: Decimal,
}

impl QualityCalculator {
    pub fn new(config: &ScoringConfig) -> Self {
        let serving_re =
            Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*g(?:rams?)?\b").expect("serving size pattern parses");
        Self {
            serving_re,
            fallback_grams: config.fallback_serving_grams,
        }
    }

    /// Score the given facts. Missing readings earn no penalty and no
    /// bonus; the result is clamped to [0, 100].
    pub fn score(&self, facts: &NutritionFacts) -> u8 {
        let grams = self.serving_grams(facts.serving_size.as_deref());
        let mut score: i32 = 100;

        let penalties = [
            (facts.calories, calorie_bands()),
            (facts.saturated_fat, saturated_fat_bands()),
            (facts.sugars, sugar_bands()),
            (facts.sodium, sodium_bands()),
        ];
        for (reading, bands) in penalties {
            if let Some(value) = reading {
                score -= i32::from(band_points(per_100g(value, grams), &bands));
            }
        }

        let bonuses = [
            (facts.dietary_fiber, fiber_bands()),
            (facts.protein, protein_bands()),
        ];
        for (reading, bands) in bonuses {
            if let Some(value) = reading {
                score += i32::from(band_points(per_100g(value, grams), &bands));
            }
        }

        score.clamp(0, 100) as u8
    }

    /// Grams per serving used for normalization. Falls back to the
    /// configured assumption when the label text is absent or carries no
    /// usable gram quantity.
    fn serving_grams(&self, serving_size: Option<&str>) -> Decimal {
        let Some(text) = serving_size else {
            return self.fallback_grams;
        };
        match self.parse_grams(text) {
            Some(grams) => grams,
            None => {
                tracing::debug!(
                    serving_size = text,
                    fallback = %self.fallback_grams,
                    "serving size not parseable as grams, assuming fallback"
                );
                self.fallback_grams
            }
        }
    }

    fn parse_grams(&self, text: &str) -> Option<Decimal> {
        let captures = self.serving_re.captures(text)?;
        let grams = Decimal::from_str(captures.get(1)?.as_str()).ok()?;
        validate_serving_grams(grams).ok()?;
        Some(grams)
    }
}

/// Scale a per-serving reading to its per-100g equivalent
fn per_100g(value: Decimal, grams: Decimal) -> Decimal {
    value * Decimal::from(100) / grams
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc() -> QualityCalculator {
        QualityCalculator::new(&ScoringConfig::default())
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_facts_score_perfect() {
        assert_eq!(calc().score(&NutritionFacts::default()), 100);
    }

    #[test]
    fn test_sodium_top_band() {
        // 1200mg in a 50g serving is 2400mg per 100g, past the top band
        let facts = NutritionFacts {
            serving_size: Some("50g".to_string()),
            sodium: Some(Decimal::from(1200)),
            ..Default::default()
        };
        assert_eq!(calc().score(&facts), 90);
    }

    #[test]
    fn test_sodium_band_boundaries() {
        let score_for = |mg: &str| {
            calc().score(&NutritionFacts {
                serving_size: Some("100g".to_string()),
                sodium: Some(dec(mg)),
                ..Default::default()
            })
        };
        assert_eq!(score_for("180"), 100); // at the band edge, no penalty
        assert_eq!(score_for("181"), 98);
        assert_eq!(score_for("540"), 96);
        assert_eq!(score_for("541"), 94);
        assert_eq!(score_for("900"), 92);
        assert_eq!(score_for("901"), 90);
    }

    #[test]
    fn test_fiber_and_protein_bonus() {
        let facts = NutritionFacts {
            serving_size: Some("100g".to_string()),
            dietary_fiber: Some(dec("5.0")),
            protein: Some(dec("9.0")),
            ..Default::default()
        };
        // both past their top band but the result stays clamped at 100
        assert_eq!(calc().score(&facts), 100);
    }

    #[test]
    fn test_bonus_offsets_penalty() {
        let facts = NutritionFacts {
            serving_size: Some("100g".to_string()),
            sugars: Some(dec("10")),
            dietary_fiber: Some(dec("5.0")),
            ..Default::default()
        };
        // -2 sugars, +5 fiber
        assert_eq!(calc().score(&facts), 100);
    }

    #[test]
    fn test_all_penalties_at_top_band() {
        let facts = NutritionFacts {
            serving_size: Some("10g".to_string()),
            calories: Some(Decimal::from(900)),
            saturated_fat: Some(Decimal::from(50)),
            sugars: Some(Decimal::from(50)),
            sodium: Some(Decimal::from(2000)),
            ..Default::default()
        };
        // four penalty nutrients at 10 points each
        assert_eq!(calc().score(&facts), 60);
    }

    #[test]
    fn test_serving_parse_variants() {
        let calc = calc();
        assert_eq!(calc.parse_grams("30g"), Some(Decimal::from(30)));
        assert_eq!(calc.parse_grams("55 g"), Some(Decimal::from(55)));
        assert_eq!(calc.parse_grams("2/3 cup (55 g)"), Some(Decimal::from(55)));
        assert_eq!(calc.parse_grams("28 grams"), Some(Decimal::from(28)));
        assert_eq!(calc.parse_grams("1.5g"), Some(dec("1.5")));
        assert_eq!(calc.parse_grams("8 fl oz"), None);
        assert_eq!(calc.parse_grams("one bag"), None);
        assert_eq!(calc.parse_grams("0g"), None);
    }

    #[test]
    fn test_unparseable_serving_uses_fallback() {
        // 360mg in an assumed 30g serving is 1200mg per 100g
        let facts = NutritionFacts {
            serving_size: Some("1 cup".to_string()),
            sodium: Some(Decimal::from(360)),
            ..Default::default()
        };
        assert_eq!(calc().score(&facts), 90);

        let absent = NutritionFacts {
            sodium: Some(Decimal::from(360)),
            ..Default::default()
        };
        assert_eq!(calc().score(&absent), 90);
    }
}
