use crate::language::Language;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub target_language: Language,
    /// Absent until the user toggles the theme; then the platform preference no longer applies.
    pub theme: Option<Theme>,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            target_language: Language::default(),
            theme: None,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn path() -> PathBuf {
        let exe = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
        let dir = exe.parent().unwrap_or(Path::new("."));
        dir.join("config.json")
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str::<Config>(&s).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let s = serde_json::to_string_pretty(self)?;
        fs::write(path, s)?;
        Ok(())
    }

    /// `TRANSLATE_API_URL` and `TARGET_LANG` win over the file.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var("TRANSLATE_API_URL").ok(),
            std::env::var("TARGET_LANG").ok(),
        );
    }

    fn apply_overrides(&mut self, api_url: Option<String>, target_lang: Option<String>) {
        if let Some(v) = api_url.filter(|v| !v.is_empty()) {
            self.api_base_url = v;
        }
        if let Some(v) = target_lang.filter(|v| !v.is_empty()) {
            match Language::from_code(&v) {
                Some(lang) => self.target_language = lang,
                None => tracing::warn!(value = %v, "ignoring unknown TARGET_LANG"),
            }
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Where user preferences survive restarts.
pub trait PreferenceStore {
    fn theme(&self) -> Option<Theme>;
    fn set_theme(&mut self, theme: Theme) -> Result<()>;
    fn set_language(&mut self, language: Language) -> Result<()>;
}

/// Writes preference changes straight back to `config.json`.
pub struct FileStore {
    config: Config,
    path: PathBuf,
}

impl FileStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self { config, path }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl PreferenceStore for FileStore {
    fn theme(&self) -> Option<Theme> {
        self.config.theme
    }

    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.config.theme = Some(theme);
        self.config.save_to(&self.path)
    }

    fn set_language(&mut self, language: Language) -> Result<()> {
        self.config.target_language = language;
        self.config.save_to(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.json"));
        assert_eq!(cfg, Config::default());
        assert!(cfg.theme.is_none());
        assert!(cfg.request_timeout().is_none());
    }

    #[test]
    fn invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme":"dark","target_language":"arabic"}"#).unwrap();
        let cfg = Config::load_from(&path);
        assert_eq!(cfg.theme, Some(Theme::Dark));
        assert_eq!(cfg.target_language, Language::Arabic);
        assert_eq!(cfg.api_base_url, "http://localhost:5000");
    }

    #[test]
    fn theme_is_persisted_as_dark_or_light() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut store = FileStore::new(Config::default(), path.clone());

        store.set_theme(Theme::Light).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains(r#""theme": "light""#));

        store.set_theme(Theme::Dark).unwrap();
        assert_eq!(Config::load_from(&path).theme, Some(Theme::Dark));
        assert_eq!(store.theme(), Some(Theme::Dark));
    }

    #[test]
    fn language_choice_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut store = FileStore::new(Config::default(), path.clone());
        store.set_language(Language::Japanese).unwrap();
        assert_eq!(Config::load_from(&path).target_language, Language::Japanese);
        assert_eq!(store.config().target_language, Language::Japanese);
    }

    #[test]
    fn overrides_apply_only_when_meaningful() {
        let mut cfg = Config::default();
        cfg.apply_overrides(Some(String::new()), Some("klingon".into()));
        assert_eq!(cfg, Config::default());

        cfg.apply_overrides(Some("https://example.test".into()), Some("german".into()));
        assert_eq!(cfg.api_base_url, "https://example.test");
        assert_eq!(cfg.target_language, Language::German);
    }
}
