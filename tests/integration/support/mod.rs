use aquacare::{CatalogProduct, CategoryRef, SpeciesData};
use std::collections::BTreeMap;

/// Catalog product fixture with a single category label.
pub fn product(id: &str, name: &str, category: &str, price: f64) -> CatalogProduct {
    CatalogProduct {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        price,
        categories: vec![CategoryRef::Label(category.to_string())],
        brand: None,
        tags: BTreeMap::new(),
    }
}

/// Attach a declared tank-size range tag to a product fixture.
pub fn with_tank_range(mut product: CatalogProduct, range: &str) -> CatalogProduct {
    product
        .tags
        .insert("tank_size".to_string(), range.to_string());
    product
}

/// The Electric Yellow Cichlid species used by the end-to-end scenario.
pub fn cichlid_species() -> SpeciesData {
    let mut specifications = BTreeMap::new();
    specifications.insert("minTankSize".to_string(), "200L".to_string());
    SpeciesData {
        product_id: "sp-901".to_string(),
        common_name: "Electric Yellow Cichlid".to_string(),
        scientific_name: "Labidochromis caeruleus".to_string(),
        specifications,
    }
}

/// Five-product catalog covering every starter category, sized 150-500 L
/// where the category cares about tank size.
pub fn starter_catalog() -> Vec<CatalogProduct> {
    vec![
        with_tank_range(
            product("f1", "Canister Filter 350", "Filtration", 50.00),
            "150-500L",
        ),
        with_tank_range(
            product("h1", "Submersible Heater 200W", "Heating", 30.00),
            "150-500L",
        ),
        product("fd1", "Cichlid Pellets", "Food", 10.00),
        product("wt1", "Prime Conditioner", "Water Treatment", 8.00),
        product("t1", "Master Test Kit", "Testing", 15.00),
    ]
}
