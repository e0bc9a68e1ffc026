//! Validation utilities for the nutrition scoring engine
//!
//! Missing nutrient data is never an error here: absent fields degrade
//! gracefully inside the calculators. Validation only rejects input that
//! is genuinely malformed, such as negative nutrient readings.

use rust_decimal::Decimal;

use crate::models::NutritionFacts;

/// Validate that every present nutrient reading can be normalized.
///
/// Absent fields pass; present fields must be non-negative.
pub fn validate_facts(facts: &NutritionFacts) -> Result<(), &'static str> {
    let readings: [(&'static str, Option<Decimal>); 17] = [
        ("calories cannot be negative", facts.calories),
        ("total fat cannot be negative", facts.total_fat),
        ("saturated fat cannot be negative", facts.saturated_fat),
        ("trans fat cannot be negative", facts.trans_fat),
        ("cholesterol cannot be negative", facts.cholesterol),
        ("sodium cannot be negative", facts.sodium),
        (
            "total carbohydrates cannot be negative",
            facts.total_carbohydrates,
        ),
        ("dietary fiber cannot be negative", facts.dietary_fiber),
        ("sugars cannot be negative", facts.sugars),
        ("added sugars cannot be negative", facts.added_sugars),
        ("protein cannot be negative", facts.protein),
        ("vitamin A cannot be negative", facts.vitamin_a),
        ("vitamin C cannot be negative", facts.vitamin_c),
        ("vitamin D cannot be negative", facts.vitamin_d),
        ("calcium cannot be negative", facts.calcium),
        ("iron cannot be negative", facts.iron),
        ("potassium cannot be negative", facts.potassium),
    ];

    for (message, value) in readings {
        if let Some(v) = value {
            if v < Decimal::ZERO {
                return Err(message);
            }
        }
    }

    Ok(())
}

/// Validate a serving-size gram quantity parsed from label text
pub fn validate_serving_grams(grams: Decimal) -> Result<(), &'static str> {
    if grams <= Decimal::ZERO {
        return Err("Serving size must be a positive gram quantity");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_facts_empty() {
        assert!(validate_facts(&NutritionFacts::default()).is_ok());
    }

    #[test]
    fn test_validate_facts_valid() {
        let facts = NutritionFacts {
            calories: Some(Decimal::from(150)),
            sodium: Some(Decimal::from(300)),
            protein: Some(Decimal::from(5)),
            ..Default::default()
        };
        assert!(validate_facts(&facts).is_ok());
    }

    #[test]
    fn test_validate_facts_zero_is_valid() {
        let facts = NutritionFacts {
            sugars: Some(Decimal::ZERO),
            ..Default::default()
        };
        assert!(validate_facts(&facts).is_ok());
    }

    #[test]
    fn test_validate_facts_negative() {
        let facts = NutritionFacts {
            sodium: Some(Decimal::from(-5)),
            ..Default::default()
        };
        let err = validate_facts(&facts).unwrap_err();
        assert!(err.contains("sodium"));
    }

    #[test]
    fn test_validate_facts_negative_vitamin() {
        let facts = NutritionFacts {
            vitamin_c: Some(Decimal::from(-1)),
            ..Default::default()
        };
        assert!(validate_facts(&facts).is_err());
    }

    #[test]
    fn test_validate_serving_grams() {
        assert!(validate_serving_grams(Decimal::from(30)).is_ok());
        assert!(validate_serving_grams(Decimal::ZERO).is_err());
        assert!(validate_serving_grams(Decimal::from(-10)).is_err());
    }
}
