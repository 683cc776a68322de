//! Engine configuration for AquaCare.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/AquaCare/config/config.toml on Windows
//!   $XDG_DATA_HOME/AquaCare/config/config.toml on Linux
//!   ~/Library/Application Support/AquaCare/config/config.toml on macOS
//!
//! The config carries the mapping from semantic care categories to the
//! catalog provider's category labels and numeric codes, so the engine is
//! never coupled to one provider's schema. Discount rates and bundle
//! success-rate labels are deliberate policy constants and are not
//! configurable here.

use crate::models::ecosystem::CareCategory;
use crate::models::catalog::CategoryRef;
use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Semantic category → provider identifier bindings.
    #[serde(default)]
    pub categories: CategoryMappings,
}

/// How one care category is identified in the provider's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBinding {
    /// Human label matched case-insensitively against product categories.
    pub label: String,
    /// Provider-specific numeric category codes that also count as a match.
    #[serde(default)]
    pub provider_codes: Vec<u64>,
}

impl CategoryBinding {
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            provider_codes: Vec::new(),
        }
    }
}

/// Full category mapping table. Defaults bind every category to its English
/// label with no provider codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMappings {
    #[serde(flatten)]
    bindings: BTreeMap<CareCategory, CategoryBinding>,
}

impl Default for CategoryMappings {
    fn default() -> Self {
        let bindings = CareCategory::ALL
            .iter()
            .map(|category| {
                (
                    *category,
                    CategoryBinding::labelled(category.default_label()),
                )
            })
            .collect();
        Self { bindings }
    }
}

impl CategoryMappings {
    pub fn binding(&self, category: CareCategory) -> Option<&CategoryBinding> {
        self.bindings.get(&category)
    }

    pub fn bind(&mut self, category: CareCategory, binding: CategoryBinding) {
        self.bindings.insert(category, binding);
    }

    /// Whether a product's category reference identifies `category` under
    /// this mapping. Unbound categories fall back to their default label.
    pub fn matches(&self, category: CareCategory, reference: &CategoryRef) -> bool {
        match self.bindings.get(&category) {
            Some(binding) => match reference {
                CategoryRef::Label(label) => label.eq_ignore_ascii_case(&binding.label),
                CategoryRef::Code(code) => binding.provider_codes.contains(code),
            },
            None => match reference {
                CategoryRef::Label(label) => {
                    label.eq_ignore_ascii_case(category.default_label())
                }
                CategoryRef::Code(_) => false,
            },
        }
    }
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the root directory where AquaCare stores data.
///
/// Order of precedence:
/// 1. `AQUACARE_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("AQUACARE_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("AquaCare"))
}

/// Returns the config directory.
pub fn config_dir() -> Result<PathBuf> {
    let root = workspace_root()?;
    Ok(root.join("config"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<EngineConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: EngineConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(EngineConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &EngineConfig) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}
