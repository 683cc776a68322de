pub mod api;
pub mod bundles;
pub mod catalog;
pub mod config;
pub mod ecosystem;
pub mod models;
pub mod recommend;
pub mod requirements;

// Re-export commonly used types for convenience.
pub use api::{generate_care_plan, generate_from_source, CarePlan};
pub use catalog::{CatalogIndex, CatalogSource, InMemoryCatalog};
pub use config::{CategoryBinding, CategoryMappings, EngineConfig};
pub use models::{
    CareCategory, CareEcosystem, CareStage, CatalogProduct, CategoryRef, Importance,
    ProductRecommendation, SmartBundle, SpeciesData,
};
pub use requirements::{FishType, NormalizedRequirements};
