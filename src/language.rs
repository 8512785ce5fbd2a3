use serde::{Deserialize, Serialize};
use std::fmt;

/// Target languages the translation service knows about.
///
/// The serialized form is the code the service expects in `target_language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Arabic,
    Chinese,
    #[default]
    French,
    German,
    Japanese,
    PortuguesePortugal,
    PortugueseBrazil,
    Russian,
    SpanishSpain,
    SpanishLatinAmerica,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::Arabic,
        Language::Chinese,
        Language::French,
        Language::German,
        Language::Japanese,
        Language::PortuguesePortugal,
        Language::PortugueseBrazil,
        Language::Russian,
        Language::SpanishSpain,
        Language::SpanishLatinAmerica,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::Arabic => "arabic",
            Language::Chinese => "chinese",
            Language::French => "french",
            Language::German => "german",
            Language::Japanese => "japanese",
            Language::PortuguesePortugal => "portuguese_portugal",
            Language::PortugueseBrazil => "portuguese_brazil",
            Language::Russian => "russian",
            Language::SpanishSpain => "spanish_spain",
            Language::SpanishLatinAmerica => "spanish_latin_america",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::Arabic => "Arabic",
            Language::Chinese => "Chinese",
            Language::French => "French",
            Language::German => "German",
            Language::Japanese => "Japanese",
            Language::PortuguesePortugal => "Portuguese (Portugal)",
            Language::PortugueseBrazil => "Portuguese (Brazil)",
            Language::Russian => "Russian",
            Language::SpanishSpain => "Spanish (Spain)",
            Language::SpanishLatinAmerica => "Spanish (Latin America)",
        }
    }

    /// Only Arabic flows right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Arabic)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_service_codes() {
        for lang in Language::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.code()));
        }
    }

    #[test]
    fn only_arabic_is_rtl() {
        let rtl: Vec<_> = Language::ALL.into_iter().filter(|l| l.is_rtl()).collect();
        assert_eq!(rtl, vec![Language::Arabic]);
    }

    #[test]
    fn from_code_is_lenient_about_case_and_whitespace() {
        assert_eq!(Language::from_code(" Spanish_Spain "), Some(Language::SpanishSpain));
        assert_eq!(Language::from_code("klingon"), None);
    }
}
