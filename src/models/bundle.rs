use super::ecosystem::ProductRecommendation;
use serde::{Deserialize, Serialize};

/// Bundle tiers the builder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleCategory {
    Starter,
    Complete,
}

impl BundleCategory {
    /// Suffix appended to the species' product id to form the bundle id.
    pub fn slug(self) -> &'static str {
        match self {
            BundleCategory::Starter => "starter",
            BundleCategory::Complete => "complete",
        }
    }
}

/// Priced package derived from a CareEcosystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartBundle {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Deduplicated, ordered recommendations included in the package.
    pub products: Vec<ProductRecommendation>,
    /// Sum of the included recommendations' prices.
    pub total_value: f64,
    /// Discounted package price; never exceeds `total_value`.
    pub bundle_price: f64,
    pub savings: f64,
    /// Fixed heuristic confidence label per tier, not derived from outcome
    /// data.
    pub success_rate: u8,
    pub suitable_for: Vec<String>,
    pub category: BundleCategory,
}
