//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::translation::SupportedLanguage;

/// Model used for text analysis
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Model used for audio analysis
pub const DEFAULT_AUDIO_MODEL: &str = "gemini-2.5-flash-native-audio-preview-12-2025";

/// Model used for speech synthesis
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Prebuilt voice for speech synthesis
pub const DEFAULT_VOICE: &str = "Puck";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub target_language: Option<String>,
    pub text_model: Option<String>,
    pub audio_model: Option<String>,
    pub tts_model: Option<String>,
    pub voice: Option<String>,
    pub speak: Option<bool>,
    pub clipboard: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            target_language: Some(SupportedLanguage::default().slug().to_string()),
            text_model: Some(DEFAULT_TEXT_MODEL.to_string()),
            audio_model: Some(DEFAULT_AUDIO_MODEL.to_string()),
            tts_model: Some(DEFAULT_TTS_MODEL.to_string()),
            voice: Some(DEFAULT_VOICE.to_string()),
            speak: Some(false),
            clipboard: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            target_language: other.target_language.or(self.target_language),
            text_model: other.text_model.or(self.text_model),
            audio_model: other.audio_model.or(self.audio_model),
            tts_model: other.tts_model.or(self.tts_model),
            voice: other.voice.or(self.voice),
            speak: other.speak.or(self.speak),
            clipboard: other.clipboard.or(self.clipboard),
        }
    }

    /// Get target language as parsed, or English if not set/invalid
    pub fn target_language_or_default(&self) -> SupportedLanguage {
        self.target_language
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn text_model_or_default(&self) -> &str {
        self.text_model.as_deref().unwrap_or(DEFAULT_TEXT_MODEL)
    }

    pub fn audio_model_or_default(&self) -> &str {
        self.audio_model.as_deref().unwrap_or(DEFAULT_AUDIO_MODEL)
    }

    pub fn tts_model_or_default(&self) -> &str {
        self.tts_model.as_deref().unwrap_or(DEFAULT_TTS_MODEL)
    }

    pub fn voice_or_default(&self) -> &str {
        self.voice.as_deref().unwrap_or(DEFAULT_VOICE)
    }

    /// Get speak setting, or false if not set
    pub fn speak_or_default(&self) -> bool {
        self.speak.unwrap_or(false)
    }

    /// Get clipboard setting, or false if not set
    pub fn clipboard_or_default(&self) -> bool {
        self.clipboard.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.api_key.is_none());
        assert_eq!(config.target_language, Some("english".to_string()));
        assert_eq!(config.text_model_or_default(), DEFAULT_TEXT_MODEL);
        assert_eq!(config.voice_or_default(), "Puck");
        assert_eq!(config.speak, Some(false));
        assert_eq!(config.clipboard, Some(false));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.api_key.is_none());
        assert!(config.target_language.is_none());
        assert!(config.tts_model.is_none());
        assert!(config.speak.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            api_key: Some("base_key".to_string()),
            target_language: Some("spanish".to_string()),
            voice: Some("Kore".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            api_key: Some("other_key".to_string()),
            target_language: None,
            voice: Some("Puck".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.api_key, Some("other_key".to_string()));
        assert_eq!(merged.target_language, Some("spanish".to_string()));
        assert_eq!(merged.voice, Some("Puck".to_string()));
    }

    #[test]
    fn target_language_or_default_parses_slug_and_name() {
        let config = AppConfig {
            target_language: Some("bengali".to_string()),
            ..Default::default()
        };
        assert_eq!(config.target_language_or_default(), SupportedLanguage::Bengali);

        let config = AppConfig {
            target_language: Some("Persian (Farsi)".to_string()),
            ..Default::default()
        };
        assert_eq!(config.target_language_or_default(), SupportedLanguage::Persian);
    }

    #[test]
    fn target_language_or_default_falls_back_on_invalid() {
        let config = AppConfig {
            target_language: Some("elvish".to_string()),
            ..Default::default()
        };
        assert_eq!(config.target_language_or_default(), SupportedLanguage::English);
    }

    #[test]
    fn model_defaults_when_unset() {
        let config = AppConfig::empty();
        assert_eq!(config.text_model_or_default(), DEFAULT_TEXT_MODEL);
        assert_eq!(config.audio_model_or_default(), DEFAULT_AUDIO_MODEL);
        assert_eq!(config.tts_model_or_default(), DEFAULT_TTS_MODEL);
    }

    #[test]
    fn boolean_defaults() {
        let config = AppConfig::empty();
        assert!(!config.speak_or_default());
        assert!(!config.clipboard_or_default());
    }
}
