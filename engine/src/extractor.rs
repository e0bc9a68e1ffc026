//! Additive extraction from ingredient text
//!
//! Two passes over the same text: an E-number pattern pass, then a
//! curated common-name pass. The matching strategy lives behind
//! [`AdditiveExtractor::extract`] so it can be replaced by a smarter
//! tokenizer without touching the score composer.

use std::collections::HashSet;
use std::sync::Arc;

use regex::Regex;
use shared::{AdditiveDefinition, DetectedAdditive};

use crate::reference::AdditiveLookup;

/// Common additive names that frequently appear on labels without an
/// E-number. Checked in this order after the pattern pass.
const COMMON_ADDITIVE_NAMES: &[&str] = &[
    "high fructose corn syrup",
    "partially hydrogenated oil",
    "monosodium glutamate",
    "aspartame",
    "sucralose",
    "acesulfame",
    "sodium nitrite",
    "sodium nitrate",
    "sodium benzoate",
    "carrageenan",
    "red 40",
    "yellow 5",
    "yellow 6",
    "blue 1",
    "maltodextrin",
    "natural flavor",
    "artificial flavor",
    "xanthan gum",
    "citric acid",
];

/// Scans free-text ingredient lists for known additives
#[derive(Clone)]
pub struct AdditiveExtractor {
    table: Arc<dyn AdditiveLookup + Send + Sync>,
    code_re: Regex,
}

impl AdditiveExtractor {
    pub fn new(table: Arc<dyn AdditiveLookup + Send + Sync>) -> Self {
        // E-number shape: letter E, exactly three digits, optional tier
        // suffix letter, e.g. "E150d" or "e322"
        let code_re = Regex::new(r"(?i)\be([0-9]{3})([a-z])?\b").expect("E-number pattern parses");
        Self { table, code_re }
    }

    /// Extract a de-duplicated, ordered list of recognized additives.
    ///
    /// Pattern-pass matches come first in order of appearance, then
    /// common-name matches in curated-list order. Duplicates resolve to
    /// the first occurrence; E-number patterns with no reference entry
    /// are dropped silently.
    pub fn extract(&self, text: &str) -> Vec<DetectedAdditive> {
        let mut detected = Vec::new();
        let mut seen = HashSet::new();

        for captures in self.code_re.captures_iter(text) {
            let code = canonical_code(&captures);
            if let Some(def) = self.table.by_code(&code) {
                push_unique(&mut detected, &mut seen, def);
            }
        }

        let haystack = text.to_lowercase();
        for name in COMMON_ADDITIVE_NAMES {
            if haystack.contains(name) {
                if let Some(def) = self.table.by_name_contains(name) {
                    push_unique(&mut detected, &mut seen, def);
                }
            }
        }

        detected
    }
}

/// Canonical form: uppercase E, lowercase tier suffix (e.g. "E150d")
fn canonical_code(captures: &regex::Captures<'_>) -> String {
    let digits = &captures[1];
    match captures.get(2) {
        Some(suffix) => format!("E{}{}", digits, suffix.as_str().to_ascii_lowercase()),
        None => format!("E{digits}"),
    }
}

fn push_unique(
    detected: &mut Vec<DetectedAdditive>,
    seen: &mut HashSet<String>,
    def: &AdditiveDefinition,
) {
    if seen.insert(def.name.to_lowercase()) {
        tracing::debug!(additive = %def.name, tier = %def.tier, "matched additive");
        detected.push(DetectedAdditive::from_definition(def));
    }
}
