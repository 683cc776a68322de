use serde::{Deserialize, Serialize};

/// How necessary a recommendation is relative to the core care requirement.
/// Essential items must satisfy the requirement alone; recommended items
/// augment; advanced items are optional enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Essential,
    Recommended,
    Advanced,
}

impl Importance {
    /// Sort rank, essential first.
    pub fn rank(self) -> u8 {
        match self {
            Importance::Essential => 0,
            Importance::Recommended => 1,
            Importance::Advanced => 2,
        }
    }
}

/// Groups recommendations by when they are used in the tank's life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareStage {
    Setup,
    Maintenance,
    Nutrition,
    Health,
}

/// Care dimensions the engine recommends for. Each belongs to exactly one
/// stage of the ecosystem structure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CareCategory {
    Filtration,
    Substrate,
    Decoration,
    Lighting,
    Heating,
    WaterTreatment,
    Cleaning,
    Testing,
    Food,
    Supplements,
    Medication,
    Quarantine,
}

impl CareCategory {
    pub const ALL: [CareCategory; 12] = [
        CareCategory::Filtration,
        CareCategory::Substrate,
        CareCategory::Decoration,
        CareCategory::Lighting,
        CareCategory::Heating,
        CareCategory::WaterTreatment,
        CareCategory::Cleaning,
        CareCategory::Testing,
        CareCategory::Food,
        CareCategory::Supplements,
        CareCategory::Medication,
        CareCategory::Quarantine,
    ];

    pub fn stage(self) -> CareStage {
        match self {
            CareCategory::Filtration
            | CareCategory::Substrate
            | CareCategory::Decoration
            | CareCategory::Lighting
            | CareCategory::Heating => CareStage::Setup,
            CareCategory::WaterTreatment | CareCategory::Cleaning | CareCategory::Testing => {
                CareStage::Maintenance
            }
            CareCategory::Food | CareCategory::Supplements => CareStage::Nutrition,
            CareCategory::Medication | CareCategory::Quarantine => CareStage::Health,
        }
    }

    /// English label used when no provider-specific binding overrides it.
    pub fn default_label(self) -> &'static str {
        match self {
            CareCategory::Filtration => "Filtration",
            CareCategory::Substrate => "Substrate",
            CareCategory::Decoration => "Decoration",
            CareCategory::Lighting => "Lighting",
            CareCategory::Heating => "Heating",
            CareCategory::WaterTreatment => "Water Treatment",
            CareCategory::Cleaning => "Cleaning",
            CareCategory::Testing => "Testing",
            CareCategory::Food => "Food",
            CareCategory::Supplements => "Supplements",
            CareCategory::Medication => "Medication",
            CareCategory::Quarantine => "Quarantine",
        }
    }
}

/// One suggested product for one care need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecommendation {
    pub id: String,
    pub name: String,
    pub category: CareCategory,
    pub price: f64,
    /// Back-reference to the CatalogProduct this recommendation came from.
    pub catalog_id: String,
    /// Human-readable justification.
    pub reason: String,
    pub importance: Importance,
    pub stage: CareStage,
}

/// Setup-stage recommendation lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupRecommendations {
    pub filtration: Vec<ProductRecommendation>,
    pub substrate: Vec<ProductRecommendation>,
    pub decoration: Vec<ProductRecommendation>,
    pub lighting: Vec<ProductRecommendation>,
    pub heating: Vec<ProductRecommendation>,
}

/// Maintenance-stage recommendation lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecommendations {
    pub water_treatment: Vec<ProductRecommendation>,
    pub cleaning: Vec<ProductRecommendation>,
    pub testing: Vec<ProductRecommendation>,
}

/// Nutrition-stage recommendation lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecommendations {
    pub food: Vec<ProductRecommendation>,
    pub supplements: Vec<ProductRecommendation>,
}

/// Health-stage recommendation lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthRecommendations {
    pub medication: Vec<ProductRecommendation>,
    pub quarantine: Vec<ProductRecommendation>,
}

/// The full recommendation set for one species, partitioned by stage then
/// category. Lists may be empty but every slot is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CareEcosystem {
    pub setup: SetupRecommendations,
    pub maintenance: MaintenanceRecommendations,
    pub nutrition: NutritionRecommendations,
    pub health: HealthRecommendations,
}

impl CareEcosystem {
    /// Mutable slot for one category's list.
    pub fn slot_mut(&mut self, category: CareCategory) -> &mut Vec<ProductRecommendation> {
        match category {
            CareCategory::Filtration => &mut self.setup.filtration,
            CareCategory::Substrate => &mut self.setup.substrate,
            CareCategory::Decoration => &mut self.setup.decoration,
            CareCategory::Lighting => &mut self.setup.lighting,
            CareCategory::Heating => &mut self.setup.heating,
            CareCategory::WaterTreatment => &mut self.maintenance.water_treatment,
            CareCategory::Cleaning => &mut self.maintenance.cleaning,
            CareCategory::Testing => &mut self.maintenance.testing,
            CareCategory::Food => &mut self.nutrition.food,
            CareCategory::Supplements => &mut self.nutrition.supplements,
            CareCategory::Medication => &mut self.health.medication,
            CareCategory::Quarantine => &mut self.health.quarantine,
        }
    }

    pub fn slot(&self, category: CareCategory) -> &[ProductRecommendation] {
        match category {
            CareCategory::Filtration => &self.setup.filtration,
            CareCategory::Substrate => &self.setup.substrate,
            CareCategory::Decoration => &self.setup.decoration,
            CareCategory::Lighting => &self.setup.lighting,
            CareCategory::Heating => &self.setup.heating,
            CareCategory::WaterTreatment => &self.maintenance.water_treatment,
            CareCategory::Cleaning => &self.maintenance.cleaning,
            CareCategory::Testing => &self.maintenance.testing,
            CareCategory::Food => &self.nutrition.food,
            CareCategory::Supplements => &self.nutrition.supplements,
            CareCategory::Medication => &self.health.medication,
            CareCategory::Quarantine => &self.health.quarantine,
        }
    }

    pub fn is_empty(&self) -> bool {
        CareCategory::ALL
            .iter()
            .all(|category| self.slot(*category).is_empty())
    }
}
