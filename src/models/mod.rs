pub mod bundle;
pub mod catalog;
pub mod ecosystem;
pub mod species;

pub use bundle::{BundleCategory, SmartBundle};
pub use catalog::{CatalogProduct, CategoryRef};
pub use ecosystem::{
    CareCategory, CareEcosystem, CareStage, HealthRecommendations, Importance,
    MaintenanceRecommendations, NutritionRecommendations, ProductRecommendation,
    SetupRecommendations,
};
pub use species::SpeciesData;
