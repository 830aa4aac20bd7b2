//! Fixed option catalogs.
//!
//! The platform, niche, and tone catalogs are closed sets with a fixed
//! order. Selection controls iterate them via `EnumIter`, labels render
//! through `Display`, and `FromStr` parses the exact label back.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Social platform a campaign targets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Platform {
    #[default]
    Instagram,
    TikTok,
    YouTube,
    X,
}

/// Content niche a persona publishes in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Niche {
    #[default]
    #[serde(rename = "Fashion & Lifestyle")]
    #[strum(serialize = "Fashion & Lifestyle")]
    FashionLifestyle,
    #[serde(rename = "Fitness & Wellness")]
    #[strum(serialize = "Fitness & Wellness")]
    FitnessWellness,
    #[serde(rename = "Luxury Travel")]
    #[strum(serialize = "Luxury Travel")]
    LuxuryTravel,
    #[serde(rename = "Tech & Gaming")]
    #[strum(serialize = "Tech & Gaming")]
    TechGaming,
    #[serde(rename = "Beauty & Skincare")]
    #[strum(serialize = "Beauty & Skincare")]
    BeautySkincare,
}

/// Visual identity tone assigned to generated personas.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum Tone {
    Luxury,
    Relatable,
    Bold,
    /// Fourth catalog entry; persona batches only draw from the first three.
    Minimal,
}
