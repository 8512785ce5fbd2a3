use crate::client::{TranslateOutcome, TranslateRequest};
use crate::clipboard::ClipboardCopier;
use crate::config::{PreferenceStore, Theme};
use crate::dispatch::Dispatch;
use crate::language::Language;
use crate::state::UiState;
use crate::view::{self, View};
use std::time::{Duration, Instant};

/// How long a result card keeps showing "Copied!".
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// A scheduled clear of `copied_index`, only valid for the copy that set it.
#[derive(Debug, Clone, Copy)]
struct CopyReset {
    index: usize,
    due: Instant,
}

/// Owns the screen state. Every mutation goes through here and is followed
/// by a fresh render.
pub struct Controller<D, S> {
    state: UiState,
    view: View,
    dispatcher: D,
    store: S,
    copier: ClipboardCopier,
    pending_reset: Option<CopyReset>,
}

impl<D: Dispatch, S: PreferenceStore> Controller<D, S> {
    /// A stored theme wins over the platform's dark-mode preference.
    pub fn new(
        dispatcher: D,
        store: S,
        copier: ClipboardCopier,
        language: Language,
        system_prefers_dark: bool,
    ) -> Self {
        let is_dark = store.theme().map(Theme::is_dark).unwrap_or(system_prefers_dark);
        let state = UiState::new(language, is_dark);
        let view = view::render(&state);
        Self { state, view, dispatcher, store, copier, pending_reset: None }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    fn rerender(&mut self) {
        self.view = view::render(&self.state);
    }

    pub fn on_input_change(&mut self, text: String) {
        self.state.input_text = text;
        self.rerender();
    }

    pub fn on_theme_toggle(&mut self) {
        self.state.is_dark = !self.state.is_dark;
        let theme = Theme::from_dark(self.state.is_dark);
        if let Err(e) = self.store.set_theme(theme) {
            tracing::warn!(?theme, error = %e, "failed to persist theme");
        }
        self.rerender();
    }

    pub fn on_language_change(&mut self, language: Language) {
        if self.state.target_language == language {
            return;
        }
        self.state.target_language = language;
        if let Err(e) = self.store.set_language(language) {
            tracing::warn!(lang = language.code(), error = %e, "failed to persist language");
        }
        self.rerender();
    }

    /// Returns whether a request went out.
    pub fn on_generate_click(&mut self) -> bool {
        if !self.state.can_generate() {
            tracing::debug!(
                generating = self.state.is_generating,
                "generate ignored"
            );
            return false;
        }
        self.state.is_generating = true;
        self.rerender();
        self.dispatcher.dispatch(TranslateRequest {
            text: self.state.input_text.clone(),
            target_language: self.state.target_language,
        });
        true
    }

    pub fn on_settled(&mut self, outcome: TranslateOutcome) {
        if !self.state.is_generating {
            tracing::warn!("settlement without a request in flight, ignoring");
            return;
        }
        let (results, emotions) = outcome.into_parts();
        tracing::info!(results = results.len(), emotions = emotions.len(), "translation settled");
        self.state.is_generating = false;
        self.state.results = results;
        self.state.top_emotions = emotions;
        self.state.copied_index = None;
        self.pending_reset = None;
        self.rerender();
    }

    /// Applies whatever the dispatcher has settled since the last call.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Some(outcome) = self.dispatcher.try_settled() {
            self.on_settled(outcome);
            changed = true;
        }
        changed
    }

    /// Returns whether the copy succeeded.
    pub fn on_copy_click(&mut self, index: usize, now: Instant) -> bool {
        let Some(result) = self.state.results.get(index) else {
            tracing::debug!(index, "copy for a result that no longer exists");
            return false;
        };
        if let Err(e) = self.copier.copy(&result.text) {
            tracing::error!(index, error = %e, "copy failed");
            return false;
        }
        self.state.copied_index = Some(index);
        // Replacing the pending reset cancels the older one.
        self.pending_reset = Some(CopyReset { index, due: now + COPY_FEEDBACK });
        self.rerender();
        true
    }

    /// Fires the copy-feedback reset once it is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending_reset {
            Some(reset) if now >= reset.due => {
                self.pending_reset = None;
                if self.state.copied_index != Some(reset.index) {
                    return false;
                }
                self.state.copied_index = None;
                self.rerender();
                true
            }
            _ => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_reset.map(|r| r.due)
    }
}
