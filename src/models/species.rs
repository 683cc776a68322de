use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized input describing the species needing care. Created by the
/// Species Requirement Source per generation request; immutable once handed
/// to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// Catalog product this species corresponds to, used for bundle naming.
    pub product_id: String,
    pub common_name: String,
    #[serde(default)]
    pub scientific_name: String,
    /// Free-form specification map (tank size, temperature range, pH range,
    /// diet, max size, ...). May be partially populated; the requirement
    /// extractor fills gaps with documented defaults.
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
}

impl SpeciesData {
    /// First specification value whose key contains `fragment`
    /// (case-insensitive). Specification keys arrive in whatever shape the
    /// upstream source uses ("minTankSize", "tank_size", "Tank Size").
    pub fn specification_containing(&self, fragment: &str) -> Option<&str> {
        let fragment = fragment.to_lowercase();
        self.specifications
            .iter()
            .find(|(key, _)| key.to_lowercase().contains(&fragment))
            .map(|(_, value)| value.as_str())
    }
}
