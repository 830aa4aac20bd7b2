//! Application services for the creator studio.
//!
//! Hosts the generation orchestrator that owns the session state and runs
//! generate commands on behalf of a rendering surface.

mod studio_usecase;

pub use studio_usecase::{GenerateOutcome, StudioUseCase};
