//! Supported target languages

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::LanguageParseError;

/// Geographic grouping used when listing languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    GlobalHub,
    AsiaIndoPacific,
    MiddleEastAfrica,
    DigitalEurope,
}

impl Region {
    /// All regions in display order
    pub const ALL: &'static [Region] = &[
        Region::GlobalHub,
        Region::AsiaIndoPacific,
        Region::MiddleEastAfrica,
        Region::DigitalEurope,
    ];

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GlobalHub => "Global Hub",
            Self::AsiaIndoPacific => "Asia & Indo-Pacific",
            Self::MiddleEastAfrica => "Middle East & Africa",
            Self::DigitalEurope => "Digital/Europe",
        }
    }

    /// Languages belonging to this region
    pub fn languages(self) -> impl Iterator<Item = SupportedLanguage> {
        SupportedLanguage::ALL
            .iter()
            .copied()
            .filter(move |lang| lang.region() == self)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of languages a result can be translated into.
///
/// Serializes as its display name, which is also the value sent to the
/// service and stored in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportedLanguage {
    #[default]
    English,
    #[serde(rename = "Chinese (Simplified)")]
    Chinese,
    Spanish,
    French,
    Portuguese,
    Russian,
    German,
    Hindi,
    Bengali,
    Japanese,
    Korean,
    Indonesian,
    Vietnamese,
    Thai,
    Punjabi,
    Tamil,
    Telugu,
    Marathi,
    #[serde(rename = "Filipino (Tagalog)")]
    Filipino,
    Arabic,
    #[serde(rename = "Persian (Farsi)")]
    Persian,
    Urdu,
    Swahili,
    Dutch,
    Polish,
    Italian,
    Turkish,
}

impl SupportedLanguage {
    pub const ALL: &'static [SupportedLanguage] = &[
        Self::English,
        Self::Chinese,
        Self::Spanish,
        Self::French,
        Self::Portuguese,
        Self::Russian,
        Self::German,
        Self::Hindi,
        Self::Bengali,
        Self::Japanese,
        Self::Korean,
        Self::Indonesian,
        Self::Vietnamese,
        Self::Thai,
        Self::Punjabi,
        Self::Tamil,
        Self::Telugu,
        Self::Marathi,
        Self::Filipino,
        Self::Arabic,
        Self::Persian,
        Self::Urdu,
        Self::Swahili,
        Self::Dutch,
        Self::Polish,
        Self::Italian,
        Self::Turkish,
    ];

    /// Display name, as sent to the service
    pub const fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Chinese => "Chinese (Simplified)",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::Portuguese => "Portuguese",
            Self::Russian => "Russian",
            Self::German => "German",
            Self::Hindi => "Hindi",
            Self::Bengali => "Bengali",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Indonesian => "Indonesian",
            Self::Vietnamese => "Vietnamese",
            Self::Thai => "Thai",
            Self::Punjabi => "Punjabi",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
            Self::Marathi => "Marathi",
            Self::Filipino => "Filipino (Tagalog)",
            Self::Arabic => "Arabic",
            Self::Persian => "Persian (Farsi)",
            Self::Urdu => "Urdu",
            Self::Swahili => "Swahili",
            Self::Dutch => "Dutch",
            Self::Polish => "Polish",
            Self::Italian => "Italian",
            Self::Turkish => "Turkish",
        }
    }

    /// Short lowercase identifier for CLI and config use
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Chinese => "chinese",
            Self::Spanish => "spanish",
            Self::French => "french",
            Self::Portuguese => "portuguese",
            Self::Russian => "russian",
            Self::German => "german",
            Self::Hindi => "hindi",
            Self::Bengali => "bengali",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Indonesian => "indonesian",
            Self::Vietnamese => "vietnamese",
            Self::Thai => "thai",
            Self::Punjabi => "punjabi",
            Self::Tamil => "tamil",
            Self::Telugu => "telugu",
            Self::Marathi => "marathi",
            Self::Filipino => "filipino",
            Self::Arabic => "arabic",
            Self::Persian => "persian",
            Self::Urdu => "urdu",
            Self::Swahili => "swahili",
            Self::Dutch => "dutch",
            Self::Polish => "polish",
            Self::Italian => "italian",
            Self::Turkish => "turkish",
        }
    }

    pub const fn region(&self) -> Region {
        match self {
            Self::English
            | Self::Chinese
            | Self::Spanish
            | Self::French
            | Self::Portuguese
            | Self::Russian
            | Self::German => Region::GlobalHub,
            Self::Hindi
            | Self::Bengali
            | Self::Japanese
            | Self::Korean
            | Self::Indonesian
            | Self::Vietnamese
            | Self::Thai
            | Self::Punjabi
            | Self::Tamil
            | Self::Telugu
            | Self::Marathi
            | Self::Filipino => Region::AsiaIndoPacific,
            Self::Arabic | Self::Persian | Self::Urdu | Self::Swahili => {
                Region::MiddleEastAfrica
            }
            Self::Dutch | Self::Polish | Self::Italian | Self::Turkish => Region::DigitalEurope,
        }
    }
}

impl FromStr for SupportedLanguage {
    type Err = LanguageParseError;

    /// Accepts either the display name or the slug, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.slug() == needle || lang.name().to_lowercase() == needle)
            .ok_or_else(|| LanguageParseError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_set_has_27_languages() {
        assert_eq!(SupportedLanguage::ALL.len(), 27);
    }

    #[test]
    fn every_language_belongs_to_one_region() {
        let total: usize = Region::ALL.iter().map(|r| r.languages().count()).sum();
        assert_eq!(total, SupportedLanguage::ALL.len());
        assert_eq!(Region::MiddleEastAfrica.languages().count(), 4);
    }

    #[test]
    fn parse_by_slug_or_name() {
        assert_eq!(
            "bengali".parse::<SupportedLanguage>().unwrap(),
            SupportedLanguage::Bengali
        );
        assert_eq!(
            "Chinese (Simplified)".parse::<SupportedLanguage>().unwrap(),
            SupportedLanguage::Chinese
        );
        assert_eq!(
            "  PERSIAN ".parse::<SupportedLanguage>().unwrap(),
            SupportedLanguage::Persian
        );
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "klingon".parse::<SupportedLanguage>().unwrap_err();
        assert_eq!(err.input, "klingon");
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&SupportedLanguage::Filipino).unwrap();
        assert_eq!(json, "\"Filipino (Tagalog)\"");

        let parsed: SupportedLanguage = serde_json::from_str("\"Persian (Farsi)\"").unwrap();
        assert_eq!(parsed, SupportedLanguage::Persian);
    }

    #[test]
    fn display_matches_name_for_all() {
        for lang in SupportedLanguage::ALL {
            assert_eq!(lang.to_string(), lang.name());
            assert_eq!(serde_json::to_value(lang).unwrap(), lang.name());
        }
    }

    #[test]
    fn default_is_english() {
        assert_eq!(SupportedLanguage::default(), SupportedLanguage::English);
    }
}
