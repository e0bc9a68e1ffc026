//! Nutrition facts model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-product nutrient readings as reported by the upstream enrichment
/// pipeline (barcode or name lookup against nutrition data providers).
///
/// Every field is optional: an absent value means "unknown", never zero.
/// Values are expressed in the source's native unit per field — kcal for
/// calories, milligrams for cholesterol and sodium, grams for the
/// macronutrients. Unit-consistent comparison is the calculators' job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Free-text serving size, e.g. "30g" or "2/3 cup (55 g)"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,

    /// kcal per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<Decimal>,

    /// Grams per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_fat: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans_fat: Option<Decimal>,

    /// Milligrams per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cholesterol: Option<Decimal>,

    /// Milligrams per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_carbohydrates: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_fiber: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugars: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_sugars: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_a: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vitamin_d: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calcium: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iron: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub potassium: Option<Decimal>,

    /// Free-text ingredient list. An ordered token list joined with ", "
    /// is treated the same as a single comma-joined label string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,

    /// Organic certification flag supplied by the caller. Absent means no
    /// certification data was wired through, which earns no bonus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organic: Option<bool>,
}

impl NutritionFacts {
    /// Ingredient text suitable for additive extraction, if any
    pub fn ingredient_text(&self) -> Option<&str> {
        self.ingredients
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Build the ingredient field from an ordered token list
    pub fn join_ingredients<S: AsRef<str>>(tokens: &[S]) -> String {
        tokens
            .iter()
            .map(|t| t.as_ref().trim())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
