use super::{recommendation, sized_category};
use crate::catalog::CatalogIndex;
use crate::models::ecosystem::{CareCategory, Importance, ProductRecommendation};
use crate::requirements::NormalizedRequirements;

/// Same intersection as filtration but capped at one: a tank has exactly
/// one correctly-sized heater need, so the pick is always essential.
pub fn recommend(
    requirements: &NormalizedRequirements,
    catalog: &CatalogIndex,
) -> Vec<ProductRecommendation> {
    let reason = format!(
        "Holds the tank inside the {} range this species needs",
        requirements.temperature_range
    );
    sized_category(CareCategory::Heating, requirements, catalog)
        .into_iter()
        .take(1)
        .map(|product| {
            recommendation(
                product,
                CareCategory::Heating,
                reason.clone(),
                Importance::Essential,
            )
        })
        .collect()
}
