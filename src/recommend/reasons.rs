//! Justification text tables keyed by fish type and diet. Kept as data so
//! the wording policy can be audited and tested without running any
//! recommender.

use crate::requirements::FishType;

const FILTRATION_REASONS: [(FishType, &str); 8] = [
    (
        FishType::Cichlid,
        "Cichlids produce significant waste and need excellent biological filtration",
    ),
    (
        FishType::Goldfish,
        "Goldfish are heavy waste producers; oversized filtration keeps the water safe",
    ),
    (
        FishType::Pleco,
        "Plecos add a large bioload; strong mechanical and biological filtration is a must",
    ),
    (
        FishType::Discus,
        "Discus demand pristine water; high-turnover filtration keeps nitrates low",
    ),
    (
        FishType::Betta,
        "Bettas prefer gentle flow; a filter with adjustable output keeps water clean without stress",
    ),
    (
        FishType::Tetra,
        "Tetras thrive in stable, well-oxygenated water maintained by steady filtration",
    ),
    (
        FishType::Guppy,
        "Guppies breed quickly; dependable filtration absorbs the growing bioload",
    ),
    (
        FishType::Angelfish,
        "Angelfish need clean, calm water; efficient filtration without strong current suits them",
    ),
];

const FILTRATION_COMMUNITY_REASON: &str =
    "Reliable filtration keeps a community tank stable and healthy";

pub fn filtration_reason(fish_type: FishType) -> &'static str {
    FILTRATION_REASONS
        .iter()
        .find(|(tag, _)| *tag == fish_type)
        .map(|(_, reason)| *reason)
        .unwrap_or(FILTRATION_COMMUNITY_REASON)
}

const SUBSTRATE_REASONS: [(FishType, &str); 4] = [
    (
        FishType::Cichlid,
        "Sand substrate lets cichlids express natural digging and sifting behaviour",
    ),
    (
        FishType::Goldfish,
        "Smooth substrate protects goldfish while they forage along the bottom",
    ),
    (
        FishType::Pleco,
        "Fine substrate is gentle on a pleco's belly as it grazes the tank floor",
    ),
    (
        FishType::Betta,
        "Dark, fine substrate shows off a betta's colours and anchors live plants",
    ),
];

pub const SUBSTRATE_COMMUNITY_REASON: &str =
    "Neutral substrate that suits most community setups";

/// Fish-type-specific substrate reason, if the table has one.
pub fn substrate_reason(fish_type: FishType) -> Option<&'static str> {
    SUBSTRATE_REASONS
        .iter()
        .find(|(tag, _)| *tag == fish_type)
        .map(|(_, reason)| *reason)
}

const FOOD_LINES: [(FishType, &str); 8] = [
    (FishType::Cichlid, "Formulated for cichlid colour and growth."),
    (FishType::Tetra, "Small pellets sized for tetra mouths."),
    (FishType::Betta, "High-protein food bettas take from the surface."),
    (FishType::Goldfish, "Easily digested food suited to goldfish."),
    (FishType::Guppy, "Fine food livebearers like guppies graze on all day."),
    (FishType::Pleco, "Sinking food that reaches bottom-dwelling plecos."),
    (FishType::Angelfish, "Varied diet that keeps angelfish in condition."),
    (FishType::Discus, "Rich food that supports demanding discus."),
];

const FOOD_COMMUNITY_LINE: &str = "Balanced staple food for a mixed community.";

pub fn food_line(fish_type: FishType) -> &'static str {
    FOOD_LINES
        .iter()
        .find(|(tag, _)| *tag == fish_type)
        .map(|(_, line)| *line)
        .unwrap_or(FOOD_COMMUNITY_LINE)
}

const DIET_OMNIVORE_BLURB: &str =
    "Covers both plant and protein needs of an omnivorous diet.";
const DIET_CARNIVORE_BLURB: &str =
    "Protein-rich formula matching a carnivorous diet.";
const DIET_HERBIVORE_BLURB: &str =
    "Vegetable-based formula matching a herbivorous diet.";

/// Nutritional blurb per diet string; unknown diets get the omnivore
/// phrasing.
pub fn diet_blurb(diet: &str) -> &'static str {
    let diet = diet.to_lowercase();
    if diet.contains("carniv") {
        DIET_CARNIVORE_BLURB
    } else if diet.contains("herbiv") {
        DIET_HERBIVORE_BLURB
    } else {
        DIET_OMNIVORE_BLURB
    }
}

pub const DECORATION_TERRITORY_REASON: &str =
    "Rock structures give cichlids territories to claim and reduce aggression";
pub const DECORATION_DRIFTWOOD_REASON: &str =
    "Driftwood provides the fibre plecos rasp on as part of their diet";
pub const DECORATION_HIDING_REASON: &str =
    "Caves give shy fish hiding spots and lower stress";
pub const DECORATION_AESTHETIC_REASON: &str =
    "Decoration that makes the tank feel like a natural habitat";

pub const WATER_DECHLORINATION_REASON: &str =
    "Removes chlorine and chloramine; every water change depends on it";
pub const WATER_CICHLID_BUFFER_REASON: &str =
    "Alkaline buffer holds the high pH and hardness Rift Lake cichlids need";
pub const WATER_STABILIZATION_REASON: &str =
    "Buffers pH swings between water changes";
pub const WATER_GENERAL_REASON: &str = "Supports overall water quality";

pub const TESTING_REASON: &str =
    "Monitors ammonia, nitrite, nitrate and pH so problems show up early";
