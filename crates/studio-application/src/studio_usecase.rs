//! Generation orchestrator.
//!
//! Owns the session state and executes the generate command: guard check,
//! artificial latency, deterministic assembly of one batch, and a single
//! atomic write back into the state.

use std::time::Duration;

use studio_core::catalog::{Niche, Platform};
use studio_core::persona::build_concepts;
use studio_core::preview::preview_data_url;
use studio_core::state::{GeneratedImage, GenerationBatch, SessionState};
use tokio::sync::{watch, Mutex};

/// Result of one generate command.
///
/// A rejected command is a plain no-op; nothing is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// A batch was produced and written into the session state.
    Completed,
    /// The guard rejected the command (prompt too short, or a run already
    /// in flight); the state is unchanged.
    NoOp,
}

/// Orchestrates generation runs over a single session state.
///
/// All mutations go through this service. Observers hold a watch receiver
/// from [`StudioUseCase::subscribe`] and re-read a snapshot when the
/// revision bumps; they see either the pre-run batch or the fully replaced
/// one, never an interleaving.
pub struct StudioUseCase {
    state: Mutex<SessionState>,
    delay: Duration,
    revision_tx: watch::Sender<u64>,
}

impl StudioUseCase {
    /// Creates an orchestrator with a fresh default session.
    pub fn new(delay: Duration) -> Self {
        let (revision_tx, _) = watch::channel(0);
        Self {
            state: Mutex::new(SessionState::default()),
            delay,
            revision_tx,
        }
    }

    /// Returns a copy of the current session state.
    pub async fn snapshot(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Subscribes to state-change notifications.
    ///
    /// The value is a revision counter; its payload carries no meaning
    /// beyond "re-read a snapshot".
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    fn notify(&self) {
        self.revision_tx.send_modify(|revision| *revision += 1);
    }

    pub async fn set_prompt(&self, prompt: impl Into<String>) {
        self.state.lock().await.set_prompt(prompt);
        self.notify();
    }

    pub async fn set_platform(&self, platform: Platform) {
        self.state.lock().await.set_platform(platform);
        self.notify();
    }

    pub async fn set_niche(&self, niche: Niche) {
        self.state.lock().await.set_niche(niche);
        self.notify();
    }

    /// Runs one generation pass.
    ///
    /// The guard check and the in-flight flag flip share one critical
    /// section, so overlapping commands resolve to [`GenerateOutcome::NoOp`]
    /// even when a caller bypasses the UI-level disabled trigger. A started
    /// run always completes and writes its batch; there is no cancellation.
    pub async fn generate(&self) -> GenerateOutcome {
        let (prompt, niche, platform) = {
            let mut state = self.state.lock().await;
            if !state.can_generate() {
                tracing::debug!("[Generate] Guard rejected request");
                return GenerateOutcome::NoOp;
            }
            state.generating = true;
            (state.prompt.trim().to_string(), state.niche, state.platform)
        };
        self.notify();

        // Simulated asynchronous work; the run suspends only here.
        tokio::time::sleep(self.delay).await;

        let batch = build_batch(&prompt, niche, platform);
        {
            let mut state = self.state.lock().await;
            state.apply_batch(batch);
            state.generating = false;
        }
        self.notify();
        tracing::info!("[Generate] Batch ready for {} / {}", niche, platform);
        GenerateOutcome::Completed
    }
}

/// Derives the three prompt variants and assembles one batch.
fn build_batch(prompt: &str, niche: Niche, platform: Platform) -> GenerationBatch {
    let variants = [
        format!("Hero campaign image for {niche}, {prompt}"),
        format!("Lifestyle close-up for {platform}, {prompt}"),
        format!("Studio portrait with bold styling, {prompt}"),
    ];

    let images = variants
        .into_iter()
        .enumerate()
        .map(|(seed, text)| {
            let data_url = preview_data_url(&text, seed);
            GeneratedImage::new(format!("Concept {}", seed + 1), text, data_url)
        })
        .collect();

    GenerationBatch::new(images, build_concepts(niche, platform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use studio_core::preview::DATA_URL_PREFIX;

    fn usecase() -> StudioUseCase {
        StudioUseCase::new(Duration::from_millis(10))
    }

    #[tokio::test]
    async fn test_short_prompt_is_a_noop() {
        let studio = usecase();
        studio.set_prompt("hi").await;

        assert_eq!(studio.generate().await, GenerateOutcome::NoOp);

        let state = studio.snapshot().await;
        assert!(state.images.is_empty());
        assert!(state.concepts.is_empty());
        assert!(!state.generating);
    }

    #[tokio::test]
    async fn test_guard_boundary_at_ten_characters() {
        let studio = usecase();

        studio.set_prompt("a".repeat(10)).await;
        assert_eq!(studio.generate().await, GenerateOutcome::NoOp);

        studio.set_prompt("a".repeat(11)).await;
        assert_eq!(studio.generate().await, GenerateOutcome::Completed);
    }

    #[tokio::test]
    async fn test_completed_run_fills_both_sequences() {
        let studio = usecase();
        studio.set_prompt("neon city editorial portrait").await;
        studio.set_niche(Niche::TechGaming).await;
        studio.set_platform(Platform::TikTok).await;

        assert_eq!(studio.generate().await, GenerateOutcome::Completed);

        let state = studio.snapshot().await;
        assert!(!state.generating);
        assert_eq!(state.images.len(), 3);
        assert_eq!(state.concepts.len(), 3);
        assert_eq!(state.images[0].title, "Concept 1");
        assert_eq!(
            state.images[0].prompt,
            "Hero campaign image for Tech & Gaming, neon city editorial portrait"
        );
        assert_eq!(
            state.images[1].prompt,
            "Lifestyle close-up for TikTok, neon city editorial portrait"
        );
        assert_eq!(
            state.images[2].prompt,
            "Studio portrait with bold styling, neon city editorial portrait"
        );
        assert!(state
            .images
            .iter()
            .all(|image| image.data_url.starts_with(DATA_URL_PREFIX)));
    }

    #[tokio::test]
    async fn test_prompt_is_trimmed_into_variants() {
        let studio = usecase();
        studio.set_prompt("   bold studio lighting   ").await;

        studio.generate().await;

        let state = studio.snapshot().await;
        assert!(state.images[0]
            .prompt
            .ends_with("Fashion & Lifestyle, bold studio lighting"));
    }

    #[tokio::test]
    async fn test_batch_is_replaced_wholesale() {
        let studio = usecase();
        studio.set_prompt("first run prompt text").await;
        studio.generate().await;
        let first: Vec<String> = studio
            .snapshot()
            .await
            .images
            .iter()
            .map(|i| i.id.clone())
            .collect();

        studio.generate().await;
        let state = studio.snapshot().await;
        let second: Vec<String> = state.images.iter().map(|i| i.id.clone()).collect();

        assert_eq!(state.images.len(), 3);
        assert_eq!(state.concepts.len(), 3);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_overlapping_run_is_rejected() {
        let studio = Arc::new(StudioUseCase::new(Duration::from_millis(100)));
        studio.set_prompt("overlapping run prompt").await;

        let first = {
            let studio = Arc::clone(&studio);
            tokio::spawn(async move { studio.generate().await })
        };

        // Give the first run time to take the in-flight flag.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(studio.snapshot().await.generating);
        assert_eq!(studio.generate().await, GenerateOutcome::NoOp);

        assert_eq!(first.await.unwrap(), GenerateOutcome::Completed);
        let state = studio.snapshot().await;
        assert!(!state.generating);
        assert_eq!(state.images.len(), 3);
    }

    #[tokio::test]
    async fn test_revision_bumps_on_mutation() {
        let studio = usecase();
        let mut revisions = studio.subscribe();
        let start = *revisions.borrow();

        studio.set_prompt("watching revisions here").await;
        revisions.changed().await.unwrap();
        assert!(*revisions.borrow() > start);

        studio.generate().await;
        assert!(*revisions.borrow_and_update() > start + 1);
    }
}
