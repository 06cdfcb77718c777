//! Languages supported by the Truecaller consent screen

use serde::{Deserialize, Serialize};

/// Consent screen language (ISO 639-1 code on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "mr")]
    Marathi,
    #[serde(rename = "te")]
    Telugu,
    #[serde(rename = "ml")]
    Malayalam,
    #[serde(rename = "ur")]
    Urdu,
    #[serde(rename = "pa")]
    Punjabi,
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "kn")]
    Kannada,
    #[serde(rename = "sw")]
    Swahili,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Language::English,
        Language::Hindi,
        Language::Marathi,
        Language::Telugu,
        Language::Malayalam,
        Language::Urdu,
        Language::Punjabi,
        Language::Tamil,
        Language::Bengali,
        Language::Kannada,
        Language::Swahili,
        Language::Arabic,
    ];

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
            Language::Telugu => "te",
            Language::Malayalam => "ml",
            Language::Urdu => "ur",
            Language::Punjabi => "pa",
            Language::Tamil => "ta",
            Language::Bengali => "bn",
            Language::Kannada => "kn",
            Language::Swahili => "sw",
            Language::Arabic => "ar",
        }
    }

    /// Get language name in English
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Marathi => "Marathi",
            Language::Telugu => "Telugu",
            Language::Malayalam => "Malayalam",
            Language::Urdu => "Urdu",
            Language::Punjabi => "Punjabi",
            Language::Tamil => "Tamil",
            Language::Bengali => "Bengali",
            Language::Kannada => "Kannada",
            Language::Swahili => "Swahili",
            Language::Arabic => "Arabic",
        }
    }

    /// Check if language uses right-to-left script
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Urdu | Language::Arabic)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == lower || lang.name().to_lowercase() == lower)
            .ok_or_else(|| format!("Unsupported language: {}", s))
    }
}
