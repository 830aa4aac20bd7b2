//! Influencer persona domain module.
//!
//! - `model`: the persona record produced by a generation run
//! - `generator`: deterministic assembly of the fixed persona trio

mod generator;
mod model;

// Re-export public API
pub use generator::{build_concepts, CONCEPTS_PER_BATCH};
pub use model::InfluencerConcept;
