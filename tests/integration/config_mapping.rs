use crate::index;
use crate::support::{cichlid_species, product};
use aquacare::config::{self, CategoryBinding, EngineConfig};
use aquacare::ecosystem::assemble;
use aquacare::requirements;
use aquacare::{CareCategory, CatalogIndex, CategoryMappings, CategoryRef};
use std::env;
use tempfile::TempDir;

#[test]
fn provider_codes_resolve_through_the_category_mapping() {
    let req = requirements::extract(&cichlid_species());

    // Provider reports categories as bare numeric codes.
    let mut coded = product("t1", "Master Test Kit", "ignored", 15.00);
    coded.categories = vec![CategoryRef::Code(417)];

    let mut mappings = CategoryMappings::default();
    mappings.bind(
        CareCategory::Testing,
        CategoryBinding {
            label: "Testing".to_string(),
            provider_codes: vec![417],
        },
    );

    let catalog = CatalogIndex::new(vec![coded], &mappings);
    let ecosystem = assemble(&req, &catalog);
    assert_eq!(ecosystem.maintenance.testing.len(), 1);
}

#[test]
fn category_labels_match_case_insensitively() {
    let req = requirements::extract(&cichlid_species());
    let lowercased = product("wt1", "Prime Conditioner", "water treatment", 8.00);
    let ecosystem = assemble(&req, &index(vec![lowercased]));
    assert_eq!(ecosystem.maintenance.water_treatment.len(), 1);
}

#[test]
fn config_round_trips_through_toml() {
    let workspace = TempDir::new().expect("temp workspace");
    env::set_var("AQUACARE_HOME", workspace.path());

    // Missing file resolves to defaults.
    let loaded = config::load_or_default().expect("defaults");
    assert!(loaded
        .categories
        .binding(CareCategory::Filtration)
        .is_some());

    let mut cfg = EngineConfig::default();
    cfg.categories.bind(
        CareCategory::Filtration,
        CategoryBinding {
            label: "Filters & Media".to_string(),
            provider_codes: vec![101, 102],
        },
    );
    config::save(&cfg).expect("save");

    let reloaded = config::load_or_default().expect("reload");
    let binding = reloaded
        .categories
        .binding(CareCategory::Filtration)
        .expect("filtration binding");
    assert_eq!(binding.label, "Filters & Media");
    assert_eq!(binding.provider_codes, vec![101, 102]);
}
