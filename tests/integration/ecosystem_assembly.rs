use crate::support::{cichlid_species, product, starter_catalog, with_tank_range};
use crate::{index, init_logging};
use aquacare::ecosystem::assemble;
use aquacare::requirements;
use aquacare::{CareCategory, Importance};

#[test]
fn assembly_is_deterministic_for_a_fixed_snapshot() {
    init_logging();
    let species = cichlid_species();
    let req = requirements::extract(&species);
    let catalog = index(starter_catalog());

    let first = assemble(&req, &catalog);
    let second = assemble(&req, &catalog);
    assert_eq!(first, second);
}

#[test]
fn empty_catalog_yields_a_fully_shaped_empty_ecosystem() {
    let req = requirements::extract(&cichlid_species());
    let catalog = index(Vec::new());
    let ecosystem = assemble(&req, &catalog);
    assert!(ecosystem.is_empty());
    for category in CareCategory::ALL {
        assert!(ecosystem.slot(category).is_empty());
    }
}

#[test]
fn filtration_intersects_category_with_tank_suitability() {
    let req = requirements::extract(&cichlid_species());
    let mut products = starter_catalog();
    // A nano filter rated below the 200 L requirement must not appear.
    products.push(with_tank_range(
        product("f2", "Nano Filter", "Filtration", 20.00),
        "10-60L",
    ));
    let ecosystem = assemble(&req, &index(products));

    let filtration = &ecosystem.setup.filtration;
    assert_eq!(filtration.len(), 1);
    assert_eq!(filtration[0].catalog_id, "f1");
    assert_eq!(filtration[0].importance, Importance::Essential);
    assert!(filtration[0].reason.contains("biological filtration"));
}

#[test]
fn heating_caps_at_one_essential_pick() {
    let req = requirements::extract(&cichlid_species());
    let mut products = starter_catalog();
    products.push(with_tank_range(
        product("h2", "Backup Heater 200W", "Heating", 25.00),
        "150-500L",
    ));
    let ecosystem = assemble(&req, &index(products));

    assert_eq!(ecosystem.setup.heating.len(), 1);
    assert_eq!(ecosystem.setup.heating[0].importance, Importance::Essential);
}

#[test]
fn lists_are_ordered_essential_first() {
    let req = requirements::extract(&cichlid_species());
    let products = vec![
        // Catalog order puts the generic additive before the conditioner;
        // sorting must surface the essential conditioner first.
        product("wt2", "Clarity Additive", "Water Treatment", 6.00),
        product("wt1", "Prime Conditioner", "Water Treatment", 8.00),
    ];
    let ecosystem = assemble(&req, &index(products));

    let treatment = &ecosystem.maintenance.water_treatment;
    assert_eq!(treatment.len(), 2);
    assert_eq!(treatment[0].catalog_id, "wt1");
    assert_eq!(treatment[0].importance, Importance::Essential);
    assert_eq!(treatment[1].importance, Importance::Recommended);
}

#[test]
fn decoration_reasons_follow_keyword_policy() {
    let req = requirements::extract(&cichlid_species());
    let products = vec![
        product("d1", "Texas Holey Rock", "Decoration", 22.00),
        product("d2", "Ceramic Cave", "Decoration", 12.00),
        product("d3", "Plastic Plant", "Decoration", 5.00),
        product("d4", "Sunken Ship", "Decoration", 18.00),
    ];
    let ecosystem = assemble(&req, &index(products));

    let decoration = &ecosystem.setup.decoration;
    assert_eq!(decoration.len(), 3, "decoration caps at three candidates");
    assert!(decoration[0].reason.contains("territories"));
    assert_eq!(decoration[0].importance, Importance::Recommended);
    assert!(decoration[1].reason.contains("hiding"));
    assert_eq!(decoration[1].importance, Importance::Advanced);
    assert_eq!(decoration[2].importance, Importance::Advanced);
}

#[test]
fn food_filters_on_species_diet_and_generic_terms() {
    let req = requirements::extract(&cichlid_species());
    let products = vec![
        product("fd1", "Cichlid Pellets", "Food", 10.00),
        product("fd2", "Koi Sticks", "Food", 9.00),
        product("fd3", "Tropical Flakes", "Food", 6.00),
    ];
    let ecosystem = assemble(&req, &index(products));

    let food = &ecosystem.nutrition.food;
    assert_eq!(food.len(), 2, "koi food mentions neither species nor diet");
    assert_eq!(food[0].catalog_id, "fd1");
    assert_eq!(food[0].importance, Importance::Essential);
    assert_eq!(food[1].catalog_id, "fd3");
    assert!(food[0].reason.contains("omnivorous"));
}

#[test]
fn unimplemented_categories_stay_empty_without_erroring() {
    let req = requirements::extract(&cichlid_species());
    let products = vec![
        product("l1", "LED Light Bar", "Lighting", 40.00),
        product("m1", "Broad Spectrum Remedy", "Medication", 14.00),
    ];
    let ecosystem = assemble(&req, &index(products));

    assert!(ecosystem.setup.lighting.is_empty());
    assert!(ecosystem.maintenance.cleaning.is_empty());
    assert!(ecosystem.nutrition.supplements.is_empty());
    assert!(ecosystem.health.medication.is_empty());
    assert!(ecosystem.health.quarantine.is_empty());
}
