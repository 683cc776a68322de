//! Read-only catalog snapshot and the provider seam in front of it.
//!
//! Each ecosystem-generation request fetches the catalog once through a
//! [`CatalogSource`], then every recommender reads the same immutable
//! [`CatalogIndex`]. A fetch failure is the provider's error; an empty
//! catalog is valid input and degrades to empty recommendation lists.

use crate::config::CategoryMappings;
use crate::models::catalog::CatalogProduct;
use crate::models::ecosystem::CareCategory;
use anyhow::Result;

/// Provider seam: anything that can deliver a fresh product snapshot.
/// Adapters for concrete commerce platforms live with the caller; the
/// engine only depends on this trait.
pub trait CatalogSource {
    fn fetch(&self) -> Result<Vec<CatalogProduct>>;
}

/// Trivial adapter over an already-materialized product list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<CatalogProduct>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn fetch(&self) -> Result<Vec<CatalogProduct>> {
        Ok(self.products.clone())
    }
}

/// Immutable per-request view over the fetched products, filterable by care
/// category and tank-size suitability. Pure reads only.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    products: Vec<CatalogProduct>,
    mappings: CategoryMappings,
}

impl CatalogIndex {
    pub fn new(products: Vec<CatalogProduct>, mappings: &CategoryMappings) -> Self {
        Self {
            products,
            mappings: mappings.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products belonging to `category` under the configured provider
    /// mapping, in catalog order.
    pub fn by_category(&self, category: CareCategory) -> Vec<&CatalogProduct> {
        self.products
            .iter()
            .filter(|product| {
                product
                    .categories
                    .iter()
                    .any(|reference| self.mappings.matches(category, reference))
            })
            .collect()
    }

    /// Products whose declared tank-size range contains `liters`, plus every
    /// product that declares no range at all. Absence of a constraint means
    /// "suitable for all sizes", never "unsuitable".
    pub fn suitable_for_tank_size(&self, liters: u32) -> Vec<&CatalogProduct> {
        self.products
            .iter()
            .filter(|product| match declared_tank_range(product) {
                Some((min, max)) => (min..=max).contains(&liters),
                None => true,
            })
            .collect()
    }
}

const TANK_RANGE_TAGS: [&str; 2] = ["tank_size", "suitable_tank_size"];

/// Parse a product's declared tank-size range from its tags. Values look
/// like "150-500L", "150-500" or a bare minimum "150L" (open-ended above).
/// Unparseable values count as undeclared.
fn declared_tank_range(product: &CatalogProduct) -> Option<(u32, u32)> {
    let value = TANK_RANGE_TAGS
        .iter()
        .find_map(|tag| product.tag(tag))?;
    let bounds = integer_runs(value);
    match bounds.as_slice() {
        [min, max, ..] => Some((*min, *max)),
        [min] => Some((*min, u32::MAX)),
        [] => None,
    }
}

/// All maximal digit runs in `text`, parsed as integers.
pub(crate) fn integer_runs(text: &str) -> Vec<u32> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            current.push(ch);
        } else if !current.is_empty() {
            if let Ok(value) = current.parse() {
                runs.push(value);
            }
            current.clear();
        }
    }
    if !current.is_empty() {
        if let Ok(value) = current.parse() {
            runs.push(value);
        }
    }
    runs
}
