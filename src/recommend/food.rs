use super::{recommendation, reasons};
use crate::catalog::CatalogIndex;
use crate::models::ecosystem::{CareCategory, Importance, ProductRecommendation};
use crate::requirements::NormalizedRequirements;

/// Food items whose text mentions the fish type, the diet, or a generic
/// community term, capped at three. The first match is the essential staple;
/// the rest add variety. The reason combines the per-type line with the
/// nutritional blurb for the species' diet.
pub fn recommend(
    requirements: &NormalizedRequirements,
    catalog: &CatalogIndex,
) -> Vec<ProductRecommendation> {
    let keyword = requirements.fish_type.keyword();
    let diet = requirements.diet.to_lowercase();
    let reason = format!(
        "{} {}",
        reasons::food_line(requirements.fish_type),
        reasons::diet_blurb(&requirements.diet)
    );

    catalog
        .by_category(CareCategory::Food)
        .into_iter()
        .filter(|product| {
            let text = product.search_text();
            text.contains(keyword)
                || text.contains(&diet)
                || text.contains("tropical")
                || text.contains("community")
        })
        .take(3)
        .enumerate()
        .map(|(index, product)| {
            let importance = if index == 0 {
                Importance::Essential
            } else {
                Importance::Recommended
            };
            recommendation(product, CareCategory::Food, reason.clone(), importance)
        })
        .collect()
}
