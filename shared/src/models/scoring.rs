//! Score types produced by the scoring engine

use serde::{Deserialize, Serialize};

use crate::models::DetectedAdditive;

/// Consumer-facing score category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    /// 80-100
    Excellent,
    /// 60-79
    Good,
    /// 40-59
    Fair,
    /// 0-39
    Poor,
}

impl ScoreCategory {
    /// Fixed one-to-one display color mapping
    pub fn color(&self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "green",
            ScoreCategory::Good => "light-green",
            ScoreCategory::Fair => "orange",
            ScoreCategory::Poor => "red",
        }
    }
}

impl std::fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreCategory::Excellent => write!(f, "Excellent"),
            ScoreCategory::Good => write!(f, "Good"),
            ScoreCategory::Fair => write!(f, "Fair"),
            ScoreCategory::Poor => write!(f, "Poor"),
        }
    }
}

/// Classify a final score into its category
pub fn category_from_score(score: u8) -> ScoreCategory {
    if score >= 80 {
        ScoreCategory::Excellent
    } else if score >= 60 {
        ScoreCategory::Good
    } else if score >= 40 {
        ScoreCategory::Fair
    } else {
        ScoreCategory::Poor
    }
}

/// Sub-scores feeding the weighted composite, each clamped to [0, 100]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub nutritional_quality: u8,
    pub additives_impact: u8,
    pub organic_bonus: u8,
}

/// Complete scoring result for one product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionScoring {
    /// Weighted composite, 0-100
    pub score: u8,
    pub category: ScoreCategory,
    pub color: String,
    pub breakdown: ScoreBreakdown,
    pub additives: Vec<DetectedAdditive>,
    pub improvements: Vec<String>,
}
