use super::{recommendation, reasons};
use crate::catalog::CatalogIndex;
use crate::models::ecosystem::{CareCategory, Importance, ProductRecommendation};
use crate::requirements::NormalizedRequirements;

/// Up to two substrate candidates. A product whose text mentions the fish
/// type gets the type-specific justification; everything else gets the
/// neutral community reason.
pub fn recommend(
    requirements: &NormalizedRequirements,
    catalog: &CatalogIndex,
) -> Vec<ProductRecommendation> {
    let keyword = requirements.fish_type.keyword();
    catalog
        .by_category(CareCategory::Substrate)
        .into_iter()
        .take(2)
        .enumerate()
        .map(|(index, product)| {
            let reason = if product.search_text().contains(keyword) {
                reasons::substrate_reason(requirements.fish_type)
                    .unwrap_or(reasons::SUBSTRATE_COMMUNITY_REASON)
            } else {
                reasons::SUBSTRATE_COMMUNITY_REASON
            };
            let importance = if index == 0 {
                Importance::Essential
            } else {
                Importance::Recommended
            };
            recommendation(product, CareCategory::Substrate, reason, importance)
        })
        .collect()
}
