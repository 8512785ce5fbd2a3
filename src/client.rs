use crate::emotion::Emotion;
use crate::language::Language;
use crate::state::TranslationResult;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

pub const TRANSLATE_PATH: &str = "/api/translate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: Language,
}

#[derive(serde::Serialize)]
struct TranslateBody<'a> {
    text: &'a str,
    target_language: Language,
}

#[derive(serde::Deserialize)]
struct TranslateResponse {
    translations: Option<Vec<TranslationResult>>,
    #[serde(default)]
    top_emotions: Option<Vec<Emotion>>,
}

#[derive(serde::Deserialize)]
struct ServiceError {
    error: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("No translation data received.")]
    MissingTranslations,
    #[error("Translation failed: HTTP error! status: {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("Translation failed: {0}")]
    Transport(String),
    #[error("Translation failed: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(" ({d})"),
        None => String::new(),
    }
}

/// How a single translate call settled.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateOutcome {
    Translated { results: Vec<TranslationResult>, emotions: Vec<Emotion> },
    Failed(TranslateError),
}

impl TranslateOutcome {
    /// Failures collapse into one error-kind result and no emotions.
    pub fn into_parts(self) -> (Vec<TranslationResult>, Vec<Emotion>) {
        match self {
            TranslateOutcome::Translated { results, emotions } => (results, emotions),
            TranslateOutcome::Failed(e) => (vec![TranslationResult::error(e.to_string())], Vec::new()),
        }
    }
}

pub struct TranslationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl TranslationClient {
    pub fn new(api_base_url: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(concat!("emotrans/", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: format!("{}{}", api_base_url.trim_end_matches('/'), TRANSLATE_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One attempt, no retries. Never fails: errors are part of the outcome.
    pub async fn translate(&self, req: &TranslateRequest) -> TranslateOutcome {
        let body = TranslateBody { text: &req.text, target_language: req.target_language };
        tracing::info!(
            chars = req.text.chars().count(),
            lang = req.target_language.code(),
            "requesting translation"
        );

        let resp = match self.http.post(&self.endpoint).json(&body).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "translate request failed");
                return TranslateOutcome::Failed(TranslateError::Transport(e.to_string()));
            }
        };

        let status = resp.status();
        let bytes = match resp.bytes().await {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(error = %e, "reading translate response failed");
                return TranslateOutcome::Failed(TranslateError::Transport(e.to_string()));
            }
        };
        let outcome = map_response(status, &bytes);
        if let TranslateOutcome::Failed(e) = &outcome {
            tracing::warn!(%status, error = %e, "translation failed");
        }
        outcome
    }
}

/// Turn a status and raw body into an outcome.
pub fn map_response(status: StatusCode, body: &[u8]) -> TranslateOutcome {
    if !status.is_success() {
        let detail = serde_json::from_slice::<ServiceError>(body).ok().map(|e| e.error);
        return TranslateOutcome::Failed(TranslateError::Status { status: status.as_u16(), detail });
    }
    match serde_json::from_slice::<TranslateResponse>(body) {
        Ok(TranslateResponse { translations: Some(results), top_emotions }) => TranslateOutcome::Translated {
            results,
            emotions: top_emotions.unwrap_or_default(),
        },
        Ok(TranslateResponse { translations: None, .. }) => {
            TranslateOutcome::Failed(TranslateError::MissingTranslations)
        }
        Err(e) => TranslateOutcome::Failed(TranslateError::Decode(e.to_string())),
    }
}
