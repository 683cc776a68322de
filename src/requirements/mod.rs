//! Normalizes a species' raw specification fields into typed care
//! parameters. Missing or unparseable fields resolve to documented
//! defaults; extraction never fails.

pub mod fish_type;

pub use fish_type::{classify, FishType};

use crate::catalog::integer_runs;
use crate::models::species::SpeciesData;
use serde::{Deserialize, Serialize};

/// Deliberate policy defaults, not error fallbacks.
pub const DEFAULT_TANK_LITERS: u32 = 100;
pub const DEFAULT_TEMPERATURE_RANGE: &str = "24-26°C";
pub const DEFAULT_PH_RANGE: &str = "7.0";
pub const DEFAULT_DIET: &str = "Omnivore";

/// Typed care parameters every recommender works from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRequirements {
    pub tank_liters: u32,
    pub temperature_range: String,
    pub ph_range: String,
    pub diet: String,
    pub fish_type: FishType,
}

/// Extract normalized requirements from a species specification. Tank size
/// is the first integer in the tank-size field (digits optionally followed
/// by "L"); the remaining fields pass through verbatim when present.
pub fn extract(species: &SpeciesData) -> NormalizedRequirements {
    let tank_liters = species
        .specification_containing("tank")
        .and_then(|value| integer_runs(value).first().copied())
        .unwrap_or(DEFAULT_TANK_LITERS);

    NormalizedRequirements {
        tank_liters,
        temperature_range: species
            .specification_containing("temp")
            .unwrap_or(DEFAULT_TEMPERATURE_RANGE)
            .to_string(),
        ph_range: species
            .specification_containing("ph")
            .unwrap_or(DEFAULT_PH_RANGE)
            .to_string(),
        diet: species
            .specification_containing("diet")
            .unwrap_or(DEFAULT_DIET)
            .to_string(),
        fish_type: classify(&species.common_name, &species.scientific_name),
    }
}
