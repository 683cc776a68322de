//! Ecosystem Assembler: fans out to every category recommender against the
//! same immutable catalog snapshot and composes the full CareEcosystem.
//! No recommender result depends on another's, so the fan-out runs as
//! independent parallel tasks with a join before composition.

use crate::catalog::CatalogIndex;
use crate::models::ecosystem::{CareCategory, CareEcosystem, ProductRecommendation};
use crate::requirements::NormalizedRequirements;
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};

/// Run every category recommender once and place each result in its slot.
/// Always returns a fully-shaped structure; an empty catalog simply yields
/// empty lists everywhere. A fault inside one recommender is logged and
/// replaced with an empty list so the others still complete.
pub fn assemble(
    requirements: &NormalizedRequirements,
    catalog: &CatalogIndex,
) -> CareEcosystem {
    let results: Vec<(CareCategory, Vec<ProductRecommendation>)> = CareCategory::ALL
        .par_iter()
        .map(|&category| (category, isolated_recommend(category, requirements, catalog)))
        .collect();

    let mut ecosystem = CareEcosystem::default();
    for (category, mut recommendations) in results {
        // Stable sort keeps catalog order within each importance tier.
        recommendations.sort_by_key(|rec| rec.importance.rank());
        *ecosystem.slot_mut(category) = recommendations;
    }
    ecosystem
}

fn isolated_recommend(
    category: CareCategory,
    requirements: &NormalizedRequirements,
    catalog: &CatalogIndex,
) -> Vec<ProductRecommendation> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        crate::recommend::recommend_for(category, requirements, catalog)
    }));
    match outcome {
        Ok(recommendations) => recommendations,
        Err(_) => {
            log::warn!(
                "recommender for {:?} failed; substituting an empty list",
                category
            );
            Vec::new()
        }
    }
}
