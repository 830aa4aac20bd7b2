//! Deterministic persona assembly.

use strum::IntoEnumIterator;

use super::model::InfluencerConcept;
use crate::catalog::{Niche, Platform, Tone};

/// Number of personas produced by one generation run.
pub const CONCEPTS_PER_BATCH: usize = 3;

/// Followers granted per ordinal step, in thousands.
const FOLLOWERS_STEP_K: usize = 120;

/// Builds the persona trio for a niche/platform pair.
///
/// Tones are taken from the catalog in order, one persona per tone; the
/// 1-based ordinal drives the name suffix and follower count. Output order
/// equals catalog order, always exactly [`CONCEPTS_PER_BATCH`] records.
pub fn build_concepts(niche: Niche, platform: Platform) -> Vec<InfluencerConcept> {
    Tone::iter()
        .take(CONCEPTS_PER_BATCH)
        .enumerate()
        .map(|(index, tone)| {
            let ordinal = index + 1;
            InfluencerConcept {
                name: format!("{tone}Nova {ordinal}"),
                niche,
                platform,
                tone,
                bio: format!(
                    "AI creator focused on {} with a {} visual identity and daily branded storytelling.",
                    niche.to_string().to_lowercase(),
                    tone.to_string().to_lowercase()
                ),
                followers: format!("{}K", ordinal * FOLLOWERS_STEP_K),
            }
        })
        .collect()
}
