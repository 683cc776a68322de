use super::{recommendation, reasons, sized_category};
use crate::catalog::CatalogIndex;
use crate::models::ecosystem::{CareCategory, Importance, ProductRecommendation};
use crate::requirements::NormalizedRequirements;

/// Filtration products that fit the tank, capped at two. The first hit
/// carries the core requirement alone, so it is essential; the second is a
/// recommended upgrade.
pub fn recommend(
    requirements: &NormalizedRequirements,
    catalog: &CatalogIndex,
) -> Vec<ProductRecommendation> {
    let reason = reasons::filtration_reason(requirements.fish_type);
    sized_category(CareCategory::Filtration, requirements, catalog)
        .into_iter()
        .take(2)
        .enumerate()
        .map(|(index, product)| {
            let importance = if index == 0 {
                Importance::Essential
            } else {
                Importance::Recommended
            };
            recommendation(product, CareCategory::Filtration, reason, importance)
        })
        .collect()
}
