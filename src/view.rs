//! Pure projection of [`UiState`] into something the adapter can paint.
//!
//! Nothing here reads the clock, the clipboard or the network, so rendering
//! the same state twice always yields an equal [`View`].

use crate::emotion::{self, EmotionBar};
use crate::state::UiState;

pub const GENERATE_LABEL: &str = "Translate Using AI";
pub const GENERATING_LABEL: &str = "Thinking...";
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyIcon {
    Copy,
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateButton {
    pub enabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyControl {
    pub copied: bool,
    pub icon: CopyIcon,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub index: usize,
    pub kind: String,
    pub text: String,
    pub is_error: bool,
    pub direction: TextDirection,
    pub copy: CopyControl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub dark: bool,
    pub generate: GenerateButton,
    /// `None` hides the results panel.
    pub results: Option<Vec<ResultCard>>,
    /// `None` hides the emotion bars.
    pub emotions: Option<Vec<EmotionBar>>,
}

pub fn render(state: &UiState) -> View {
    View {
        dark: state.is_dark,
        generate: generate_button(state),
        results: result_cards(state),
        emotions: emotion_bars(state),
    }
}

fn generate_button(state: &UiState) -> GenerateButton {
    GenerateButton {
        enabled: state.can_generate(),
        busy: state.is_generating,
        label: if state.is_generating { GENERATING_LABEL } else { GENERATE_LABEL },
    }
}

fn result_cards(state: &UiState) -> Option<Vec<ResultCard>> {
    if state.results.is_empty() {
        return None;
    }
    let direction = if state.target_language.is_rtl() {
        TextDirection::RightToLeft
    } else {
        TextDirection::LeftToRight
    };
    let cards = state
        .results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            let copied = state.copied_index == Some(index);
            ResultCard {
                index,
                kind: result.kind.clone(),
                text: result.text.clone(),
                is_error: result.is_error(),
                direction,
                copy: CopyControl {
                    copied,
                    icon: if copied { CopyIcon::Check } else { CopyIcon::Copy },
                    label: if copied { COPIED_LABEL } else { COPY_LABEL },
                },
            }
        })
        .collect();
    Some(cards)
}

fn emotion_bars(state: &UiState) -> Option<Vec<EmotionBar>> {
    if state.top_emotions.is_empty() {
        None
    } else {
        Some(emotion::normalize(&state.top_emotions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::Emotion;
    use crate::language::Language;
    use crate::state::TranslationResult;

    fn with_results() -> UiState {
        UiState {
            input_text: "hello".into(),
            results: vec![
                TranslationResult::new("", "Bonjour"),
                TranslationResult::new("", "Salut"),
            ],
            ..UiState::default()
        }
    }

    #[test]
    fn empty_state_hides_panels_and_disables_generate() {
        let view = render(&UiState::default());
        assert!(view.results.is_none());
        assert!(view.emotions.is_none());
        assert!(!view.generate.enabled);
        assert_eq!(view.generate.label, GENERATE_LABEL);
    }

    #[test]
    fn whitespace_input_keeps_generate_disabled() {
        let state = UiState { input_text: "  \n\t".into(), ..UiState::default() };
        assert!(!render(&state).generate.enabled);
    }

    #[test]
    fn generating_shows_busy_label_and_disables_button() {
        let state = UiState {
            input_text: "hi".into(),
            is_generating: true,
            ..UiState::default()
        };
        let view = render(&state);
        assert!(!view.generate.enabled);
        assert!(view.generate.busy);
        assert_eq!(view.generate.label, GENERATING_LABEL);
    }

    #[test]
    fn one_card_per_result_in_order() {
        let view = render(&with_results());
        let cards = view.results.unwrap();
        let texts: Vec<_> = cards.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["Bonjour", "Salut"]);
        assert_eq!(cards[1].index, 1);
    }

    #[test]
    fn only_the_copied_card_shows_copied_state() {
        let state = UiState { copied_index: Some(1), ..with_results() };
        let cards = render(&state).results.unwrap();
        assert_eq!(cards[0].copy.icon, CopyIcon::Copy);
        assert_eq!(cards[0].copy.label, COPY_LABEL);
        assert!(cards[1].copy.copied);
        assert_eq!(cards[1].copy.icon, CopyIcon::Check);
        assert_eq!(cards[1].copy.label, COPIED_LABEL);
    }

    #[test]
    fn direction_follows_current_language_selection() {
        let mut state = with_results();
        state.target_language = Language::Arabic;
        let cards = render(&state).results.unwrap();
        assert!(cards.iter().all(|c| c.direction == TextDirection::RightToLeft));

        state.target_language = Language::German;
        let cards = render(&state).results.unwrap();
        assert!(cards.iter().all(|c| c.direction == TextDirection::LeftToRight));
    }

    #[test]
    fn error_results_are_flagged() {
        let state = UiState {
            results: vec![TranslationResult::error("Translation failed: boom")],
            ..UiState::default()
        };
        let cards = render(&state).results.unwrap();
        assert!(cards[0].is_error);
    }

    #[test]
    fn emotion_bars_are_normalized() {
        let state = UiState {
            top_emotions: vec![Emotion::new("joy", 8.0), Emotion::new("anger", 2.0)],
            ..UiState::default()
        };
        let bars = render(&state).emotions.unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].percentage, 100.0);
        assert_eq!(bars[1].percentage, 25.0);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let state = UiState {
            copied_index: Some(0),
            is_dark: true,
            top_emotions: vec![Emotion::new("joy", 1.0)],
            ..with_results()
        };
        assert_eq!(render(&state), render(&state));
    }
}
