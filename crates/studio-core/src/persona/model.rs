//! Influencer persona domain model.
//!
//! Represents synthetic influencer profiles with no backing real entity.
//! Records are immutable once created and replaced as a whole batch by the
//! next generation run.

use serde::{Deserialize, Serialize};

use crate::catalog::{Niche, Platform, Tone};

/// A synthetic influencer profile assembled from the tone catalog and the
/// session's selected niche and platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerConcept {
    /// Display name derived from the tone and ordinal (e.g. "LuxuryNova 1")
    pub name: String,
    /// Niche the persona publishes in
    pub niche: Niche,
    /// Platform the persona publishes on
    pub platform: Platform,
    /// Visual identity tone from the catalog
    pub tone: Tone,
    /// One-sentence profile description
    pub bio: String,
    /// Follower count with thousands suffix (e.g. "240K")
    pub followers: String,
}
