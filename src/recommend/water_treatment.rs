use super::{recommendation, reasons};
use crate::catalog::CatalogIndex;
use crate::models::ecosystem::{CareCategory, Importance, ProductRecommendation};
use crate::requirements::{FishType, NormalizedRequirements};

/// Up to three water-treatment candidates. Dechlorinators ("prime" or
/// "conditioner" in the name) are always essential; buffers are recommended
/// with a reason specialized for alkaline-water cichlids.
pub fn recommend(
    requirements: &NormalizedRequirements,
    catalog: &CatalogIndex,
) -> Vec<ProductRecommendation> {
    catalog
        .by_category(CareCategory::WaterTreatment)
        .into_iter()
        .take(3)
        .map(|product| {
            let name = product.name.to_lowercase();
            let (importance, reason) = if name.contains("prime") || name.contains("conditioner") {
                (Importance::Essential, reasons::WATER_DECHLORINATION_REASON)
            } else if requirements.fish_type == FishType::Cichlid && name.contains("buffer") {
                (Importance::Recommended, reasons::WATER_CICHLID_BUFFER_REASON)
            } else if name.contains("buffer") {
                (Importance::Recommended, reasons::WATER_STABILIZATION_REASON)
            } else {
                (Importance::Recommended, reasons::WATER_GENERAL_REASON)
            };
            recommendation(product, CareCategory::WaterTreatment, reason, importance)
        })
        .collect()
}
