use super::{recommendation, reasons};
use crate::catalog::CatalogIndex;
use crate::models::ecosystem::{CareCategory, Importance, ProductRecommendation};
use crate::requirements::{FishType, NormalizedRequirements};

/// Up to three decoration candidates with keyword-driven justifications.
/// Decoration never carries the core care requirement, so the first pick is
/// recommended and the rest are optional enrichment.
pub fn recommend(
    requirements: &NormalizedRequirements,
    catalog: &CatalogIndex,
) -> Vec<ProductRecommendation> {
    catalog
        .by_category(CareCategory::Decoration)
        .into_iter()
        .take(3)
        .enumerate()
        .map(|(index, product)| {
            let importance = if index == 0 {
                Importance::Recommended
            } else {
                Importance::Advanced
            };
            let reason = decoration_reason(requirements.fish_type, &product.name);
            recommendation(product, CareCategory::Decoration, reason, importance)
        })
        .collect()
}

fn decoration_reason(fish_type: FishType, product_name: &str) -> &'static str {
    let name = product_name.to_lowercase();
    if fish_type == FishType::Cichlid && name.contains("rock") {
        reasons::DECORATION_TERRITORY_REASON
    } else if fish_type == FishType::Pleco && name.contains("driftwood") {
        reasons::DECORATION_DRIFTWOOD_REASON
    } else if name.contains("cave") {
        reasons::DECORATION_HIDING_REASON
    } else {
        reasons::DECORATION_AESTHETIC_REASON
    }
}
