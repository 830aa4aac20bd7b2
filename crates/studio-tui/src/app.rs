//! Terminal application loop and input handling.
//!
//! The loop redraws from a fresh session snapshot, then waits on the next
//! terminal event, a state-change notification, or the redraw tick. All
//! session mutations go through the orchestrator; the view stays pure.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use strum::IntoEnumIterator;
use studio_application::StudioUseCase;
use studio_core::config::StudioConfig;
use studio_core::state::SessionState;

use crate::input::InputBuffer;
use crate::view::{self, ViewContext};

/// Form controls in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    Prompt,
    Platform,
    Niche,
    Generate,
}

impl FocusField {
    fn next(self) -> Self {
        match self {
            Self::Prompt => Self::Platform,
            Self::Platform => Self::Niche,
            Self::Niche => Self::Generate,
            Self::Generate => Self::Prompt,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Prompt => Self::Generate,
            Self::Platform => Self::Prompt,
            Self::Niche => Self::Platform,
            Self::Generate => Self::Niche,
        }
    }
}

/// Top-level UI state: focus, prompt editor, session handle.
pub struct StudioApp {
    running: bool,
    focus: FocusField,
    input: InputBuffer,
    config: StudioConfig,
    session: Arc<StudioUseCase>,
}

impl StudioApp {
    /// Creates the app with the prompt editor seeded from the session.
    pub async fn new(config: StudioConfig, session: Arc<StudioUseCase>) -> Self {
        let snapshot = session.snapshot().await;
        Self {
            running: true,
            focus: FocusField::Prompt,
            input: InputBuffer::with_content(&snapshot.prompt),
            config,
            session,
        }
    }

    /// Drives the terminal until the user quits.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        let mut events = EventStream::new();
        let mut revisions = self.session.subscribe();
        let mut tick =
            tokio::time::interval(Duration::from_millis(self.config.tick_rate_ms.max(16)));

        while self.running {
            let snapshot = self.session.snapshot().await;
            let ctx = ViewContext {
                brand_name: &self.config.brand_name,
                focus: self.focus,
                prompt: self.input.as_str(),
                cursor: self.input.cursor_chars(),
            };
            terminal.draw(|frame| view::render(frame, &snapshot, &ctx))?;

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event, &snapshot).await,
                        Some(Err(err)) => {
                            tracing::warn!("[Tui] Terminal event error: {}", err);
                        }
                        None => self.running = false,
                    }
                }
                changed = revisions.changed() => {
                    // A closed channel means the orchestrator is gone.
                    if changed.is_err() {
                        self.running = false;
                    }
                }
                _ = tick.tick() => {}
            }
        }
        Ok(())
    }

    async fn handle_event(&mut self, event: Event, snapshot: &SessionState) {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return;
        };

        match (modifiers, code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => {
                self.running = false;
            }
            (KeyModifiers::NONE, KeyCode::Tab) => self.focus = self.focus.next(),
            (KeyModifiers::SHIFT, KeyCode::BackTab) => self.focus = self.focus.previous(),
            (KeyModifiers::NONE, KeyCode::Enter) => {
                if self.focus == FocusField::Generate {
                    self.trigger_generate(snapshot);
                } else {
                    self.focus = self.focus.next();
                }
            }
            _ => match self.focus {
                FocusField::Prompt => self.handle_prompt_key(code, modifiers).await,
                FocusField::Platform => {
                    if let Some(forward) = select_direction(code) {
                        self.session
                            .set_platform(cycled(snapshot.platform, forward))
                            .await;
                    }
                }
                FocusField::Niche => {
                    if let Some(forward) = select_direction(code) {
                        self.session.set_niche(cycled(snapshot.niche, forward)).await;
                    }
                }
                FocusField::Generate => {}
            },
        }
    }

    async fn handle_prompt_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.input.insert_char(c);
            }
            (KeyModifiers::NONE, KeyCode::Backspace) => self.input.backspace(),
            (KeyModifiers::NONE, KeyCode::Delete) => self.input.delete(),
            (KeyModifiers::NONE, KeyCode::Left) => {
                self.input.move_left();
                return;
            }
            (KeyModifiers::NONE, KeyCode::Right) => {
                self.input.move_right();
                return;
            }
            (KeyModifiers::NONE, KeyCode::Home) => {
                self.input.move_home();
                return;
            }
            (KeyModifiers::NONE, KeyCode::End) => {
                self.input.move_end();
                return;
            }
            _ => return,
        }
        self.session.set_prompt(self.input.as_str().to_string()).await;
    }

    /// Spawns one generation run. The trigger is disabled while a run is in
    /// flight; the orchestrator re-checks the guard on its own.
    fn trigger_generate(&self, snapshot: &SessionState) {
        if !snapshot.can_generate() {
            return;
        }
        let session = Arc::clone(&self.session);
        tokio::spawn(async move {
            session.generate().await;
        });
    }
}

/// Maps a key to a select cycling direction.
fn select_direction(code: KeyCode) -> Option<bool> {
    match code {
        KeyCode::Right | KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('l') => Some(true),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('h') => Some(false),
        _ => None,
    }
}

/// Steps through a catalog enum in display order, wrapping at the ends.
fn cycled<T>(current: T, forward: bool) -> T
where
    T: IntoEnumIterator + PartialEq + Copy,
{
    let options: Vec<T> = T::iter().collect();
    let index = options
        .iter()
        .position(|option| *option == current)
        .unwrap_or(0);
    let next = if forward {
        (index + 1) % options.len()
    } else {
        (index + options.len() - 1) % options.len()
    };
    options[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::catalog::{Niche, Platform};

    #[test]
    fn test_focus_cycle_is_closed() {
        let mut focus = FocusField::Prompt;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, FocusField::Prompt);
        assert_eq!(FocusField::Prompt.previous(), FocusField::Generate);
    }

    #[test]
    fn test_cycled_wraps_in_catalog_order() {
        assert_eq!(cycled(Platform::Instagram, true), Platform::TikTok);
        assert_eq!(cycled(Platform::X, true), Platform::Instagram);
        assert_eq!(cycled(Platform::Instagram, false), Platform::X);
        assert_eq!(cycled(Niche::BeautySkincare, true), Niche::FashionLifestyle);
    }

    #[test]
    fn test_select_direction_mapping() {
        assert_eq!(select_direction(KeyCode::Right), Some(true));
        assert_eq!(select_direction(KeyCode::Left), Some(false));
        assert_eq!(select_direction(KeyCode::Char('x')), None);
    }
}
