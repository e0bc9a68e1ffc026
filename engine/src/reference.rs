//! Additive reference table
//!
//! The table is populated once from seed data and read-only at scoring
//! time. Calculators receive it as an injected lookup capability so the
//! engine can be exercised against fixture tables in tests.

use shared::AdditiveDefinition;

/// Read-only lookup capability over the additive reference data
pub trait AdditiveLookup {
    /// Exact E-number lookup, case-insensitive (e.g. "E102", "e150d")
    fn by_code(&self, code: &str) -> Option<&AdditiveDefinition>;

    /// First definition whose display name contains the given text,
    /// case-insensitive
    fn by_name_contains(&self, text: &str) -> Option<&AdditiveDefinition>;
}

/// In-memory additive reference table
#[derive(Debug, Clone)]
pub struct AdditiveTable {
    definitions: Vec<AdditiveDefinition>,
}

const BUILTIN_SEED: &str = include_str!("../data/additives.json");

impl AdditiveTable {
    pub fn new(definitions: Vec<AdditiveDefinition>) -> Self {
        Self { definitions }
    }

    /// Build a table from a JSON array of definitions
    pub fn from_seed_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// The curated seed shipped with the engine. The embedded JSON is
    /// covered by tests; failing to parse it is a build defect.
    pub fn builtin() -> Self {
        Self::from_seed_json(BUILTIN_SEED).expect("embedded additive seed parses")
    }

    pub fn definitions(&self) -> &[AdditiveDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl AdditiveLookup for AdditiveTable {
    fn by_code(&self, code: &str) -> Option<&AdditiveDefinition> {
        self.definitions.iter().find(|d| {
            d.code
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(code))
        })
    }

    fn by_name_contains(&self, text: &str) -> Option<&AdditiveDefinition> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.definitions
            .iter()
            .find(|d| d.name.to_lowercase().contains(&needle))
    }
}
