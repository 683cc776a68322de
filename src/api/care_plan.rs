use crate::bundles::build_bundles;
use crate::catalog::{CatalogIndex, CatalogSource};
use crate::config::CategoryMappings;
use crate::ecosystem::assemble;
use crate::models::bundle::SmartBundle;
use crate::models::ecosystem::CareEcosystem;
use crate::models::species::SpeciesData;
use crate::requirements;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-facing result of one generation request: the assembled ecosystem
/// plus the bundles derived from it. Plain nested data, ready for JSON
/// persistence or an API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarePlan {
    pub plan_id: Uuid,
    pub species_common_name: String,
    pub ecosystem: CareEcosystem,
    pub bundles: Vec<SmartBundle>,
    pub generated_at: DateTime<Utc>,
}

/// Generate the care ecosystem and smart bundles for one species against an
/// already-fetched catalog snapshot.
///
/// Species data with no usable identity is rejected here, before any
/// recommender runs; everything downstream degrades to empty lists instead
/// of failing.
pub fn generate_care_plan(species: &SpeciesData, catalog: &CatalogIndex) -> Result<CarePlan> {
    if species.common_name.trim().is_empty() && species.scientific_name.trim().is_empty() {
        bail!("Species data carries neither a common nor a scientific name");
    }

    let requirements = requirements::extract(species);
    log::debug!(
        "generating care plan for {:?} ({} L, {:?})",
        species.common_name,
        requirements.tank_liters,
        requirements.fish_type
    );
    let ecosystem = assemble(&requirements, catalog);
    let bundles = build_bundles(species, &ecosystem);

    Ok(CarePlan {
        plan_id: Uuid::new_v4(),
        species_common_name: species.common_name.clone(),
        ecosystem,
        bundles,
        generated_at: Utc::now(),
    })
}

/// Convenience entry point that performs the once-per-request catalog fetch.
/// A provider fetch failure propagates as an error, distinct from a
/// legitimately empty catalog (which yields an empty-but-valid plan).
pub fn generate_from_source(
    species: &SpeciesData,
    source: &dyn CatalogSource,
    mappings: &CategoryMappings,
) -> Result<CarePlan> {
    let products = source
        .fetch()
        .context("Failed to fetch catalog snapshot from provider")?;
    let catalog = CatalogIndex::new(products, mappings);
    generate_care_plan(species, &catalog)
}
