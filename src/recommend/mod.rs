//! Category recommenders. Each module implements the uniform contract
//! `recommend(&NormalizedRequirements, &CatalogIndex) -> Vec<ProductRecommendation>`
//! with its own selection-and-ranking policy. Recommenders are side-effect
//! free and deterministic for a given catalog snapshot.

pub mod decoration;
pub mod filtration;
pub mod food;
pub mod heating;
pub mod reasons;
pub mod substrate;
pub mod testing;
pub mod water_treatment;

use crate::catalog::CatalogIndex;
use crate::models::catalog::CatalogProduct;
use crate::models::ecosystem::{CareCategory, Importance, ProductRecommendation};
use crate::requirements::NormalizedRequirements;

/// Dispatch to the recommender for one care category. Categories without a
/// selection policy yet (lighting, cleaning, supplements, medication,
/// quarantine) return an empty list: "no recommendation available" is a
/// valid outcome, never an error.
pub fn recommend_for(
    category: CareCategory,
    requirements: &NormalizedRequirements,
    catalog: &CatalogIndex,
) -> Vec<ProductRecommendation> {
    match category {
        CareCategory::Filtration => filtration::recommend(requirements, catalog),
        CareCategory::Substrate => substrate::recommend(requirements, catalog),
        CareCategory::Decoration => decoration::recommend(requirements, catalog),
        CareCategory::Heating => heating::recommend(requirements, catalog),
        CareCategory::Food => food::recommend(requirements, catalog),
        CareCategory::WaterTreatment => water_treatment::recommend(requirements, catalog),
        CareCategory::Testing => testing::recommend(requirements, catalog),
        CareCategory::Lighting
        | CareCategory::Cleaning
        | CareCategory::Supplements
        | CareCategory::Medication
        | CareCategory::Quarantine => Vec::new(),
    }
}

/// Build one recommendation from a catalog product. The stage follows from
/// the category; the recommendation keeps the product's exact price.
pub(crate) fn recommendation(
    product: &CatalogProduct,
    category: CareCategory,
    reason: impl Into<String>,
    importance: Importance,
) -> ProductRecommendation {
    ProductRecommendation {
        id: product.id.clone(),
        name: product.name.clone(),
        category,
        price: product.price,
        catalog_id: product.id.clone(),
        reason: reason.into(),
        importance,
        stage: category.stage(),
    }
}

/// Intersect a category's products with tank-size suitability, preserving
/// catalog order. Shared by the filtration and heating policies.
pub(crate) fn sized_category<'a>(
    category: CareCategory,
    requirements: &NormalizedRequirements,
    catalog: &'a CatalogIndex,
) -> Vec<&'a CatalogProduct> {
    let suitable: Vec<&str> = catalog
        .suitable_for_tank_size(requirements.tank_liters)
        .iter()
        .map(|product| product.id.as_str())
        .collect();
    catalog
        .by_category(category)
        .into_iter()
        .filter(|product| suitable.contains(&product.id.as_str()))
        .collect()
}
