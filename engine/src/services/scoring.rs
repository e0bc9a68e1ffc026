//! Score composition and batch orchestration

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::{
    category_from_score, validate_facts, NutritionFacts, NutritionScoring, RiskTier,
    ScoreBreakdown, ScoreCategory,
};

use crate::config::ScoringConfig;
use crate::error::{EngineResult, ScoringError};
use crate::reference::AdditiveLookup;
use crate::services::additives::{AdditivesImpact, AdditivesImpactCalculator};
use crate::services::organic::organic_bonus;
use crate::services::quality::QualityCalculator;

/// Composes the three sub-scores into a consumer-facing nutrition score
#[derive(Clone)]
pub struct ScoringService {
    quality: QualityCalculator,
    additives: AdditivesImpactCalculator,
    config: ScoringConfig,
}

impl ScoringService {
    pub fn new(table: Arc<dyn AdditiveLookup + Send + Sync>, config: ScoringConfig) -> Self {
        Self {
            quality: QualityCalculator::new(&config),
            additives: AdditivesImpactCalculator::new(table),
            config,
        }
    }

    /// Service backed by the curated built-in reference table and the
    /// default weights
    pub fn with_builtin_table() -> Self {
        Self::new(
            Arc::new(crate::reference::AdditiveTable::builtin()),
            ScoringConfig::default(),
        )
    }

    /// Score a single product.
    ///
    /// Pure function of the facts plus the injected reference table.
    /// Missing data degrades gracefully inside the sub-calculators; only
    /// genuinely malformed input fails.
    pub fn score(&self, facts: &NutritionFacts) -> EngineResult<NutritionScoring> {
        validate_facts(facts).map_err(|msg| ScoringError::InvalidFacts(msg.to_string()))?;

        let quality = self.quality.score(facts);
        let impact = self.additives.assess(facts);
        let organic = organic_bonus(facts);

        let score = self.compose(quality, impact.score, organic);
        let category = category_from_score(score);
        let improvements = self.improvements(quality, &impact, organic);

        Ok(NutritionScoring {
            score,
            category,
            color: category.color().to_string(),
            breakdown: ScoreBreakdown {
                nutritional_quality: quality,
                additives_impact: impact.score,
                organic_bonus: organic,
            },
            additives: impact.additives,
            improvements,
        })
    }

    /// Score many products concurrently, preserving input order.
    ///
    /// All items are dispatched before any join and every item settles:
    /// a failed or panicked slot is replaced by a sentinel poor-score
    /// result instead of aborting the batch.
    pub async fn batch_score(&self, batch: Vec<NutritionFacts>) -> Vec<NutritionScoring> {
        let handles: Vec<_> = batch
            .into_iter()
            .map(|facts| {
                let service = self.clone();
                tokio::spawn(async move { service.score(&facts) })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (index, handle) in handles.into_iter().enumerate() {
            let settled = match handle.await {
                Ok(result) => result,
                Err(join_error) => Err(ScoringError::TaskFailed(join_error.to_string())),
            };
            match settled {
                Ok(scoring) => results.push(scoring),
                Err(error) => {
                    tracing::warn!(
                        index,
                        error = %error,
                        "scoring failed for batch item, substituting sentinel result"
                    );
                    results.push(sentinel_scoring());
                }
            }
        }
        results
    }

    /// Weighted composite of the sub-scores, rounded to the nearest
    /// integer with .5 rounding away from zero
    fn compose(&self, quality: u8, additives: u8, organic: u8) -> u8 {
        let weights = &self.config.weights;
        let weighted = Decimal::from(quality) * weights.quality
            + Decimal::from(additives) * weights.additives
            + Decimal::from(organic) * weights.organic;
        let rounded = weighted.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        rounded.to_u32().unwrap_or(0).min(100) as u8
    }

    /// Rule-based improvement suggestions. Rules are independent and all
    /// applicable ones fire, quality first, then additives, then organic.
    fn improvements(&self, quality: u8, impact: &AdditivesImpact, organic: u8) -> Vec<String> {
        let mut suggestions = Vec::new();

        if quality < 60 {
            suggestions
                .push("Look for options with less sugar, sodium, and saturated fat".to_string());
            suggestions.push("Prefer products with more dietary fiber and protein".to_string());
        }

        if impact.score < 80 {
            let concerning: Vec<String> = impact
                .additives
                .iter()
                .filter(|a| a.tier >= RiskTier::Moderate)
                .map(|a| a.label())
                .collect();
            if !concerning.is_empty() {
                suggestions.push(format!(
                    "Avoid products containing {}",
                    concerning.join(", ")
                ));
            }
        }

        if organic == 0 {
            suggestions.push("Consider a certified organic alternative".to_string());
        }

        suggestions
    }
}

/// Worst-case placeholder substituted when scoring a batch item fails
fn sentinel_scoring() -> NutritionScoring {
    NutritionScoring {
        score: 0,
        category: ScoreCategory::Poor,
        color: ScoreCategory::Poor.color().to_string(),
        breakdown: ScoreBreakdown {
            nutritional_quality: 0,
            additives_impact: 0,
            organic_bonus: 0,
        },
        additives: Vec::new(),
        improvements: vec!["Unable to calculate nutrition score".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::DetectedAdditive;

    fn service() -> ScoringService {
        ScoringService::with_builtin_table()
    }

    #[test]
    fn test_improvement_rules_fire_in_order() {
        let impact = AdditivesImpact {
            score: 60,
            additives: vec![DetectedAdditive {
                code: Some("E102".to_string()),
                name: "Tartrazine (Yellow 5)".to_string(),
                tier: RiskTier::High,
                description: String::new(),
                deduction: 20,
            }],
        };

        let suggestions = service().improvements(50, &impact, 0);

        assert_eq!(suggestions.len(), 4);
        assert!(suggestions[0].contains("less sugar"));
        assert!(suggestions[1].contains("dietary fiber"));
        assert!(suggestions[2].starts_with("Avoid products containing"));
        assert!(suggestions[3].contains("organic"));
    }

    #[test]
    fn test_additive_rule_skips_low_tiers() {
        let impact = AdditivesImpact {
            score: 75,
            additives: vec![DetectedAdditive {
                code: None,
                name: "Natural flavors".to_string(),
                tier: RiskTier::Limited,
                description: String::new(),
                deduction: 5,
            }],
        };

        let suggestions = service().improvements(100, &impact, 100);
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_compose_rounds_midpoint_up() {
        // 90*0.6 + 65*0.3 + 0*0.1 = 73.5
        assert_eq!(service().compose(90, 65, 0), 74);
    }

    #[test]
    fn test_compose_full_marks() {
        assert_eq!(service().compose(100, 100, 100), 100);
    }

    #[test]
    fn test_compose_zero() {
        assert_eq!(service().compose(0, 0, 0), 0);
    }

    #[test]
    fn test_sentinel_shape() {
        let sentinel = sentinel_scoring();
        assert_eq!(sentinel.score, 0);
        assert_eq!(sentinel.category, ScoreCategory::Poor);
        assert_eq!(sentinel.color, "red");
        assert_eq!(
            sentinel.improvements,
            vec!["Unable to calculate nutrition score".to_string()]
        );
    }
}
