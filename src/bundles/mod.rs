//! Smart Bundle Builder: derives the starter and complete packages from an
//! assembled ecosystem and prices them.

use crate::models::bundle::{BundleCategory, SmartBundle};
use crate::models::ecosystem::{CareEcosystem, Importance, ProductRecommendation};
use crate::models::species::SpeciesData;

/// Literal policy constants. The success rates are heuristic confidence
/// labels carried as-is, not figures computed from outcome data.
const STARTER_DISCOUNT_RATE: f64 = 0.10;
const COMPLETE_DISCOUNT_RATE: f64 = 0.15;
const STARTER_SUCCESS_RATE: u8 = 85;
const COMPLETE_SUCCESS_RATE: u8 = 94;

/// Build the bundles an ecosystem supports. A tier is only emitted when at
/// least one product qualified for it.
pub fn build_bundles(species: &SpeciesData, ecosystem: &CareEcosystem) -> Vec<SmartBundle> {
    let mut bundles = Vec::new();
    if let Some(bundle) = starter_bundle(species, ecosystem) {
        bundles.push(bundle);
    }
    if let Some(bundle) = complete_bundle(species, ecosystem) {
        bundles.push(bundle);
    }
    bundles
}

/// At most one essential item from each core category: filtration, heating,
/// food, water treatment, testing.
fn starter_bundle(species: &SpeciesData, ecosystem: &CareEcosystem) -> Option<SmartBundle> {
    let core_lists = [
        &ecosystem.setup.filtration,
        &ecosystem.setup.heating,
        &ecosystem.nutrition.food,
        &ecosystem.maintenance.water_treatment,
        &ecosystem.maintenance.testing,
    ];
    let mut picks = Vec::new();
    for list in core_lists {
        if let Some(rec) = list.iter().find(|rec| is_essential(rec)) {
            picks.push(rec.clone());
        }
    }
    price_bundle(species, picks, BundleCategory::Starter)
}

/// Broader selection across setup, maintenance and nutrition. Every starter
/// category reappears here with the same first-qualifying pick, which keeps
/// the starter a subset of the complete bundle.
fn complete_bundle(species: &SpeciesData, ecosystem: &CareEcosystem) -> Option<SmartBundle> {
    let mut picks: Vec<ProductRecommendation> = Vec::new();
    picks.extend(take_core(&ecosystem.setup.filtration, 1));
    picks.extend(take_core(&ecosystem.setup.substrate, 1));
    picks.extend(take_core(&ecosystem.setup.decoration, 2));
    picks.extend(
        ecosystem
            .setup
            .heating
            .iter()
            .filter(|rec| is_essential(rec))
            .take(1)
            .cloned(),
    );
    picks.extend(take_core(&ecosystem.nutrition.food, 2));
    picks.extend(
        ecosystem
            .maintenance
            .water_treatment
            .iter()
            .filter(|rec| is_core(rec))
            .cloned(),
    );
    picks.extend(
        ecosystem
            .maintenance
            .testing
            .iter()
            .filter(|rec| is_essential(rec))
            .take(1)
            .cloned(),
    );
    price_bundle(species, picks, BundleCategory::Complete)
}

fn is_essential(rec: &ProductRecommendation) -> bool {
    rec.importance == Importance::Essential
}

/// Essential or recommended, the tiers that belong in a purchasable package.
fn is_core(rec: &ProductRecommendation) -> bool {
    matches!(
        rec.importance,
        Importance::Essential | Importance::Recommended
    )
}

fn take_core(list: &[ProductRecommendation], cap: usize) -> Vec<ProductRecommendation> {
    list.iter().filter(|rec| is_core(rec)).take(cap).cloned().collect()
}

fn price_bundle(
    species: &SpeciesData,
    picks: Vec<ProductRecommendation>,
    category: BundleCategory,
) -> Option<SmartBundle> {
    let products = dedup_by_catalog_id(picks);
    if products.is_empty() {
        return None;
    }

    let (rate, success_rate) = match category {
        BundleCategory::Starter => (STARTER_DISCOUNT_RATE, STARTER_SUCCESS_RATE),
        BundleCategory::Complete => (COMPLETE_DISCOUNT_RATE, COMPLETE_SUCCESS_RATE),
    };
    // Prices come from the recommendations themselves, never re-fetched.
    let total_value = round_cents(products.iter().map(|rec| rec.price).sum());
    let bundle_price = round_cents(total_value * (1.0 - rate));
    let savings = round_cents(total_value - bundle_price);

    let (name, description) = match category {
        BundleCategory::Starter => (
            format!("{} Starter Kit", species.common_name),
            format!(
                "The essential equipment to get a {} tank running",
                species.common_name
            ),
        ),
        BundleCategory::Complete => (
            format!("{} Complete Care Bundle", species.common_name),
            format!(
                "Full setup, maintenance and nutrition package for {}",
                species.common_name
            ),
        ),
    };

    Some(SmartBundle {
        id: format!("{}-{}", species.product_id, category.slug()),
        name,
        description,
        products,
        total_value,
        bundle_price,
        savings,
        success_rate,
        suitable_for: vec![species.common_name.clone()],
        category,
    })
}

fn dedup_by_catalog_id(picks: Vec<ProductRecommendation>) -> Vec<ProductRecommendation> {
    let mut seen = Vec::new();
    let mut products = Vec::new();
    for rec in picks {
        if seen.contains(&rec.catalog_id) {
            continue;
        }
        seen.push(rec.catalog_id.clone());
        products.push(rec);
    }
    products
}

/// Round to the catalog's price precision (two decimals).
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
