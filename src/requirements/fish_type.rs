use serde::{Deserialize, Serialize};

/// Coarse species classification used to pick contextually relevant
/// justification text and filtering rules. `Community` is the catch-all, so
/// classification is total: every species maps to exactly one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FishType {
    Cichlid,
    Tetra,
    Betta,
    Goldfish,
    Guppy,
    Pleco,
    Angelfish,
    Discus,
    Community,
}

impl FishType {
    /// Keyword this tag matches against product/species text.
    pub fn keyword(self) -> &'static str {
        match self {
            FishType::Cichlid => "cichlid",
            FishType::Tetra => "tetra",
            FishType::Betta => "betta",
            FishType::Goldfish => "goldfish",
            FishType::Guppy => "guppy",
            FishType::Pleco => "pleco",
            FishType::Angelfish => "angelfish",
            FishType::Discus => "discus",
            FishType::Community => "community",
        }
    }
}

/// Classification vocabulary, checked in order. Kept as data so the matching
/// policy is auditable and testable apart from the recommenders that use it.
const CLASSIFICATION_KEYWORDS: [(FishType, &str); 8] = [
    (FishType::Cichlid, "cichlid"),
    (FishType::Tetra, "tetra"),
    (FishType::Betta, "betta"),
    (FishType::Goldfish, "goldfish"),
    (FishType::Guppy, "guppy"),
    (FishType::Pleco, "pleco"),
    (FishType::Angelfish, "angelfish"),
    (FishType::Discus, "discus"),
];

/// Classify a species by case-insensitive substring match of its names
/// against the fixed vocabulary.
pub fn classify(common_name: &str, scientific_name: &str) -> FishType {
    let haystack = format!("{} {}", common_name, scientific_name).to_lowercase();
    CLASSIFICATION_KEYWORDS
        .iter()
        .find(|(_, keyword)| haystack.contains(keyword))
        .map(|(fish_type, _)| *fish_type)
        .unwrap_or(FishType::Community)
}
