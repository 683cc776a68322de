use crate::index;
use crate::support::{cichlid_species, product, starter_catalog};
use aquacare::bundles::build_bundles;
use aquacare::ecosystem::assemble;
use aquacare::models::BundleCategory;
use aquacare::requirements;
use aquacare::CategoryRef;

#[test]
fn both_tiers_price_against_their_fixed_discount_rates() {
    let species = cichlid_species();
    let req = requirements::extract(&species);
    let ecosystem = assemble(&req, &index(starter_catalog()));
    let bundles = build_bundles(&species, &ecosystem);

    assert_eq!(bundles.len(), 2);
    for bundle in &bundles {
        let rate = match bundle.category {
            BundleCategory::Starter => 0.10,
            BundleCategory::Complete => 0.15,
        };
        let expected_price = (bundle.total_value * (1.0 - rate) * 100.0).round() / 100.0;
        assert_eq!(bundle.bundle_price, expected_price);
        assert_eq!(
            bundle.savings,
            ((bundle.total_value - bundle.bundle_price) * 100.0).round() / 100.0
        );
        assert!(bundle.bundle_price <= bundle.total_value);
    }
}

#[test]
fn starter_products_are_a_subset_of_the_complete_bundle() {
    let species = cichlid_species();
    let req = requirements::extract(&species);
    let mut products = starter_catalog();
    products.push(product("s1", "Fine Sand", "Substrate", 12.00));
    products.push(product("d1", "Texas Holey Rock", "Decoration", 22.00));
    let ecosystem = assemble(&req, &index(products));
    let bundles = build_bundles(&species, &ecosystem);

    let starter = bundles
        .iter()
        .find(|b| b.category == BundleCategory::Starter)
        .expect("starter bundle");
    let complete = bundles
        .iter()
        .find(|b| b.category == BundleCategory::Complete)
        .expect("complete bundle");

    for rec in &starter.products {
        assert!(
            complete.products.iter().any(|c| c.catalog_id == rec.catalog_id),
            "starter item {} missing from complete bundle",
            rec.catalog_id
        );
    }
    assert!(complete.products.len() > starter.products.len());
}

#[test]
fn bundle_products_are_deduplicated_by_catalog_id() {
    let species = cichlid_species();
    let req = requirements::extract(&species);
    // One product doubling as filter and conditioner qualifies for the
    // starter through two categories; it must be counted once.
    let mut combo = product("c1", "All-In-One Conditioner Filter", "Filtration", 40.00);
    combo
        .categories
        .push(CategoryRef::Label("Water Treatment".to_string()));
    let ecosystem = assemble(&req, &index(vec![combo]));
    let bundles = build_bundles(&species, &ecosystem);

    let starter = bundles
        .iter()
        .find(|b| b.category == BundleCategory::Starter)
        .expect("starter bundle");
    assert_eq!(starter.products.len(), 1);
    assert_eq!(starter.total_value, 40.00);
}

#[test]
fn no_bundles_are_emitted_for_an_empty_ecosystem() {
    let species = cichlid_species();
    let req = requirements::extract(&species);
    let ecosystem = assemble(&req, &index(Vec::new()));
    assert!(build_bundles(&species, &ecosystem).is_empty());
}

#[test]
fn bundle_identity_and_labelling_follow_the_species() {
    let species = cichlid_species();
    let req = requirements::extract(&species);
    let ecosystem = assemble(&req, &index(starter_catalog()));
    let bundles = build_bundles(&species, &ecosystem);

    let starter = &bundles[0];
    assert_eq!(starter.id, "sp-901-starter");
    assert_eq!(starter.suitable_for, vec!["Electric Yellow Cichlid"]);
    assert!(starter.name.contains("Electric Yellow Cichlid"));

    let complete = &bundles[1];
    assert_eq!(complete.id, "sp-901-complete");
    assert_eq!(complete.success_rate, 94);
}
