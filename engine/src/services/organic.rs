//! Organic certification bonus

use shared::NutritionFacts;

/// Organic bonus sub-score: 100 for a certified-organic product, else 0.
///
/// Certification sourcing is the caller's concern; when no certification
/// data is wired through, the bonus stays 0.
pub fn organic_bonus(facts: &NutritionFacts) -> u8 {
    if facts.organic == Some(true) {
        100
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organic_bonus() {
        let organic = NutritionFacts {
            organic: Some(true),
            ..Default::default()
        };
        assert_eq!(organic_bonus(&organic), 100);

        let conventional = NutritionFacts {
            organic: Some(false),
            ..Default::default()
        };
        assert_eq!(organic_bonus(&conventional), 0);

        assert_eq!(organic_bonus(&NutritionFacts::default()), 0);
    }
}
