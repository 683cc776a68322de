use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category reference as the Catalog Provider reports it: either a human
/// label ("Filtration") or a provider-specific numeric code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Code(u64),
    Label(String),
}

/// Product available for recommendation. Owned and refreshed entirely by the
/// external Catalog Provider; the engine reads a snapshot and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
    #[serde(default)]
    pub brand: Option<String>,
    /// Free-form provider annotations (suitable tank-size range, target pH
    /// effect, target fish type, ...).
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl CatalogProduct {
    /// Lowercased name + description, used by keyword-based selection rules.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}
