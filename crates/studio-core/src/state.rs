//! Session state aggregate.
//!
//! The single mutable state a studio session binds its controls to. It is
//! initialized once with fixed defaults, mutated in place for the life of
//! the session, and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Niche, Platform};
use crate::persona::InfluencerConcept;

/// Prompt length (trimmed, in characters) that must be exceeded before a
/// generation run may start.
pub const MIN_PROMPT_CHARS: usize = 10;

/// Prompt preloaded into a fresh session.
pub const DEFAULT_PROMPT: &str =
    "High-fashion editorial portrait, cinematic soft light, confident AI influencer in neon city";

/// A placeholder image concept produced by a generation run.
///
/// Immutable after creation; the next run replaces the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    /// Unique identifier within the batch
    pub id: String,
    /// Ordinal label (e.g. "Concept 2")
    pub title: String,
    /// Derived prompt the preview was rendered from
    pub prompt: String,
    /// Self-contained SVG payload, usable directly as an image source
    pub data_url: String,
}

impl GeneratedImage {
    /// Creates an image record with a fresh unique id.
    pub fn new(
        title: impl Into<String>,
        prompt: impl Into<String>,
        data_url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            prompt: prompt.into(),
            data_url: data_url.into(),
        }
    }
}

/// The output of one generation run.
///
/// Images and concepts travel together; [`SessionState::apply_batch`]
/// replaces both sequences in a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationBatch {
    pub images: Vec<GeneratedImage>,
    pub concepts: Vec<InfluencerConcept>,
    /// When the batch was assembled.
    pub generated_at: DateTime<Utc>,
}

impl GenerationBatch {
    /// Creates a batch stamped with the current time.
    pub fn new(images: Vec<GeneratedImage>, concepts: Vec<InfluencerConcept>) -> Self {
        Self {
            images,
            concepts,
            generated_at: Utc::now(),
        }
    }
}

/// Mutable fields the studio UI binds to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Free-form image prompt
    pub prompt: String,
    /// Selected platform, always a catalog member
    pub platform: Platform,
    /// Selected niche, always a catalog member
    pub niche: Niche,
    /// True for the duration of one generation run
    pub generating: bool,
    /// Current image sequence; empty until the first successful run
    pub images: Vec<GeneratedImage>,
    /// Current persona sequence; replaced together with `images`
    pub concepts: Vec<InfluencerConcept>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            platform: Platform::default(),
            niche: Niche::default(),
            generating: false,
            images: Vec::new(),
            concepts: Vec::new(),
        }
    }
}

impl SessionState {
    /// Creates a session with the fixed startup defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn set_niche(&mut self, niche: Niche) {
        self.niche = niche;
    }

    /// True when a generate command would start a run: the trimmed prompt
    /// is long enough and no run is in flight.
    pub fn can_generate(&self) -> bool {
        self.prompt.trim().chars().count() > MIN_PROMPT_CHARS && !self.generating
    }

    /// Replaces both output sequences in one step.
    pub fn apply_batch(&mut self, batch: GenerationBatch) {
        self.images = batch.images;
        self.concepts = batch.concepts;
    }

    /// True once a generation run has produced output.
    pub fn has_output(&self) -> bool {
        !self.images.is_empty()
    }
}
