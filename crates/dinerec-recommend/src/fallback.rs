//! Directory-only recommendations used when the model cannot be.

use dinerec_core::{Narrative, NormalizedVenue, VerifiedRecommendation};

pub const GENERIC_HIGHLIGHTS: [&str; 2] = ["popular locally", "recommended in this area"];
pub const GENERIC_ATMOSPHERE: &str = "no info";
pub const GENERIC_REASON: &str = "matches your search in the directory";

/// Fixed narrative attached to every synthesized recommendation.
#[must_use]
pub fn generic_narrative() -> Narrative {
    Narrative {
        highlights: GENERIC_HIGHLIGHTS.iter().map(|s| (*s).to_string()).collect(),
        atmosphere: GENERIC_ATMOSPHERE.to_string(),
        reason: GENERIC_REASON.to_string(),
    }
}

/// Builds recommendations for the first `count` candidates, in order.
#[must_use]
pub fn synthesize(candidates: &[NormalizedVenue], count: usize) -> Vec<VerifiedRecommendation> {
    candidates
        .iter()
        .take(count)
        .map(|venue| VerifiedRecommendation::new(venue, generic_narrative()))
        .collect()
}
