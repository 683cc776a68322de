use super::{recommendation, reasons};
use crate::catalog::CatalogIndex;
use crate::models::ecosystem::{CareCategory, Importance, ProductRecommendation};
use crate::requirements::NormalizedRequirements;

/// A single test kit, always essential: water parameters have to be
/// observable before anything else can be corrected.
pub fn recommend(
    _requirements: &NormalizedRequirements,
    catalog: &CatalogIndex,
) -> Vec<ProductRecommendation> {
    catalog
        .by_category(CareCategory::Testing)
        .into_iter()
        .take(1)
        .map(|product| {
            recommendation(
                product,
                CareCategory::Testing,
                reasons::TESTING_REASON,
                Importance::Essential,
            )
        })
        .collect()
}
