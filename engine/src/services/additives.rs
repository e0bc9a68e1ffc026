//! Additives impact sub-score

use std::sync::Arc;

use shared::{DetectedAdditive, NutritionFacts};

use crate::extractor::AdditiveExtractor;
use crate::reference::AdditiveLookup;

/// Result of assessing a product's additive load
#[derive(Debug, Clone)]
pub struct AdditivesImpact {
    /// Sub-score in [0, 100]
    pub score: u8,
    pub additives: Vec<DetectedAdditive>,
}

impl AdditivesImpact {
    fn clean() -> Self {
        Self {
            score: 100,
            additives: Vec::new(),
        }
    }
}

/// Converts detected additives into a 0-100 sub-score
#[derive(Clone)]
pub struct AdditivesImpactCalculator {
    extractor: AdditiveExtractor,
}

impl AdditivesImpactCalculator {
    pub fn new(table: Arc<dyn AdditiveLookup + Send + Sync>) -> Self {
        Self {
            extractor: AdditiveExtractor::new(table),
        }
    }

    /// Assess the ingredient list. Absent ingredient data is treated as
    /// "nothing concerning detected", not as a failure.
    pub fn assess(&self, facts: &NutritionFacts) -> AdditivesImpact {
        let Some(text) = facts.ingredient_text() else {
            return AdditivesImpact::clean();
        };

        let additives = self.extractor.extract(text);
        let deductions: i32 = additives.iter().map(|a| i32::from(a.deduction)).sum();

        AdditivesImpact {
            score: (100 - deductions).clamp(0, 100) as u8,
            additives,
        }
    }
}
