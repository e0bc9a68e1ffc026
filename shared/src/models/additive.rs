//! Food additive taxonomy

use serde::{Deserialize, Serialize};

/// Health-concern classification of a food additive, safest first.
///
/// Tiers are ordered; point deductions are reference data attached to
/// each [`AdditiveDefinition`], not derived from the tier itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// No documented health concern
    NoRisk,
    /// Limited risk at typical intake levels
    Limited,
    /// Moderate concern, best consumed occasionally
    Moderate,
    /// High concern, avoidance recommended
    High,
}

impl RiskTier {
    /// Display color used by consumer-facing surfaces
    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::NoRisk => "green",
            RiskTier::Limited => "yellow",
            RiskTier::Moderate => "orange",
            RiskTier::High => "red",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskTier::NoRisk => write!(f, "No risk"),
            RiskTier::Limited => write!(f, "Limited risk"),
            RiskTier::Moderate => write!(f, "Moderate risk"),
            RiskTier::High => write!(f, "High risk"),
        }
    }
}

/// Reference data for one known additive, loaded once at startup and
/// read-only afterwards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditiveDefinition {
    /// Canonical E-number, e.g. "E102"; additives commonly listed only by
    /// name (e.g. "Natural flavors") carry no code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub name: String,
    pub tier: RiskTier,
    pub description: String,
    /// Points subtracted from the additives sub-score per occurrence
    pub deduction: u8,
}

/// One ingredient-list token resolved against the reference table.
/// Created fresh per scoring call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedAdditive {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub name: String,
    pub tier: RiskTier,
    pub description: String,
    pub deduction: u8,
}

impl DetectedAdditive {
    pub fn from_definition(def: &AdditiveDefinition) -> Self {
        Self {
            code: def.code.clone(),
            name: def.name.clone(),
            tier: def.tier,
            description: def.description.clone(),
            deduction: def.deduction,
        }
    }

    /// Human-readable label, e.g. "Tartrazine (E102)"
    pub fn label(&self) -> String {
        match &self.code {
            Some(code) => format!("{} ({})", self.name, code),
            None => self.name.clone(),
        }
    }
}
