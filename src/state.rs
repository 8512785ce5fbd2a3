use crate::emotion::Emotion;
use crate::language::Language;
use serde::{Deserialize, Serialize};

/// Kind given to the synthetic entry that reports a failed translation.
pub const ERROR_KIND: &str = "Error";

/// One translation variant as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl TranslationResult {
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self { kind: kind.into(), text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ERROR_KIND, text)
    }

    pub fn is_error(&self) -> bool {
        self.kind == ERROR_KIND
    }
}

/// Everything the screen shows is derived from this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub input_text: String,
    pub results: Vec<TranslationResult>,
    pub copied_index: Option<usize>,
    pub is_generating: bool,
    pub is_dark: bool,
    pub top_emotions: Vec<Emotion>,
    pub target_language: Language,
}

impl UiState {
    pub fn new(target_language: Language, is_dark: bool) -> Self {
        Self { target_language, is_dark, ..Self::default() }
    }

    pub fn has_input(&self) -> bool {
        !self.input_text.trim().is_empty()
    }

    pub fn can_generate(&self) -> bool {
        self.has_input() && !self.is_generating
    }
}
