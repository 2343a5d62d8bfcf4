//! Translation result entity

use serde::{Deserialize, Serialize};

use super::language::SupportedLanguage;

/// Intensity values are always within this range after validation
pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

/// Results whose `equivalent` is shorter than this are spoken as-is
const SPEAKABLE_EQUIVALENT_LIMIT: usize = 100;

/// Last line of every clipboard export
pub const EXPORT_TRAILER: &str = "Translated by LingoLens (Sana Ullah Sagar)";

/// How the same feeling is expressed in another major language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalLink {
    pub language: String,
    pub phrase: String,
    pub context: String,
}

/// The service-provided part of a translation, as accepted by the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPayload {
    pub meaning: String,
    pub source_native_script: String,
    pub source_phonetic_script: String,
    pub target_script: String,
    pub target_phonetic: String,
    pub cultural_nuance: String,
    pub cultural_insight_target: String,
    pub input_language_summary: String,
    pub intensity: u8,
    pub equivalent: String,
    pub detected_context: Option<String>,
    pub transcription: Option<String>,
    pub sagor_global_link: Option<GlobalLink>,
    pub sus_insight: Option<String>,
}

/// Normalized structured output of one analysis request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub meaning: String,
    pub source_native_script: String,
    pub source_phonetic_script: String,
    pub target_script: String,
    pub target_phonetic: String,
    pub cultural_nuance: String,
    pub cultural_insight_target: String,
    pub input_language_summary: String,
    pub intensity: u8,
    pub equivalent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sagor_global_link: Option<GlobalLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sus_insight: Option<String>,
    pub original_text: String,
    pub target_language: SupportedLanguage,
}

impl TranslationResult {
    /// Attach the request echo to a validated payload
    pub fn from_payload(
        payload: TranslationPayload,
        original_text: impl Into<String>,
        target_language: SupportedLanguage,
    ) -> Self {
        Self {
            meaning: payload.meaning,
            source_native_script: payload.source_native_script,
            source_phonetic_script: payload.source_phonetic_script,
            target_script: payload.target_script,
            target_phonetic: payload.target_phonetic,
            cultural_nuance: payload.cultural_nuance,
            cultural_insight_target: payload.cultural_insight_target,
            input_language_summary: payload.input_language_summary,
            intensity: payload.intensity,
            equivalent: payload.equivalent,
            detected_context: payload.detected_context,
            transcription: payload.transcription,
            sagor_global_link: payload.sagor_global_link,
            sus_insight: payload.sus_insight,
            original_text: original_text.into(),
            target_language,
        }
    }

    /// Whether this result came from an audio request
    pub fn is_audio_origin(&self) -> bool {
        self.transcription.is_some()
    }

    pub fn intensity_level(&self) -> IntensityLevel {
        IntensityLevel::from_intensity(self.intensity)
    }

    /// Text to hand to speech synthesis: the equivalent expression when it is
    /// short enough, otherwise the standard meaning.
    pub fn speakable_text(&self) -> &str {
        let equivalent = self.equivalent.trim();
        if !equivalent.is_empty() && equivalent.chars().count() < SPEAKABLE_EQUIVALENT_LIMIT {
            equivalent
        } else {
            &self.meaning
        }
    }

    /// Plain-text export of the result
    pub fn to_clipboard_text(&self) -> String {
        let mut out = format!(
            "Standard Meaning: {}\n\
             Source Script: {} ({})\n\
             Target Script: {} ({})\n\
             Target Insight ({}): {}\n\
             English Insight: {}\n\
             User's Guide (Input Lang): {}\n",
            self.meaning,
            self.source_native_script,
            self.source_phonetic_script,
            self.target_script,
            self.target_phonetic,
            self.target_language,
            self.cultural_insight_target,
            self.cultural_nuance,
            self.input_language_summary,
        );
        if let Some(link) = &self.sagor_global_link {
            out.push_str(&format!(
                "Global Link: {}: \"{}\" - {}\n",
                link.language, link.phrase, link.context
            ));
        }
        out.push_str(&format!("Intensity: {}/{}\n", self.intensity, MAX_INTENSITY));
        if let Some(origin) = &self.detected_context {
            out.push_str(&format!("Origin: {}\n", origin));
        }
        out.push('\n');
        out.push_str(EXPORT_TRAILER);
        out
    }
}

/// Coarse bucket for the intensity rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityLevel {
    Mild,
    Moderate,
    Intense,
}

impl IntensityLevel {
    pub const fn from_intensity(value: u8) -> Self {
        if value < 4 {
            Self::Mild
        } else if value < 7 {
            Self::Moderate
        } else {
            Self::Intense
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Intense => "Intense",
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_payload() -> TranslationPayload {
        TranslationPayload {
            meaning: "I am fine".to_string(),
            source_native_script: "আমি ভালো আছি".to_string(),
            source_phonetic_script: "Ami bhalo achi".to_string(),
            target_script: "আমি ভালো আছি".to_string(),
            target_phonetic: "Ami bhalo achi".to_string(),
            cultural_nuance: "A warm, everyday reassurance.".to_string(),
            cultural_insight_target: "একটি সাধারণ আশ্বাস।".to_string(),
            input_language_summary: "Ami bhalo achi mane ami thik achi.".to_string(),
            intensity: 3,
            equivalent: "Sab thik hai".to_string(),
            detected_context: Some("Bengali (Romanized)".to_string()),
            transcription: None,
            sagor_global_link: Some(GlobalLink {
                language: "Spanish".to_string(),
                phrase: "Estoy bien".to_string(),
                context: "Same casual reassurance.".to_string(),
            }),
            sus_insight: None,
        }
    }

    pub(crate) fn sample_result() -> TranslationResult {
        TranslationResult::from_payload(
            sample_payload(),
            "Ami bhalo achi",
            SupportedLanguage::Bengali,
        )
    }

    #[test]
    fn from_payload_attaches_request_echo() {
        let result = sample_result();
        assert_eq!(result.original_text, "Ami bhalo achi");
        assert_eq!(result.target_language, SupportedLanguage::Bengali);
        assert_eq!(result.meaning, "I am fine");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample_result()).unwrap();
        assert_eq!(value["sourceNativeScript"], "আমি ভালো আছি");
        assert_eq!(value["targetLanguage"], "Bengali");
        assert_eq!(value["sagorGlobalLink"]["phrase"], "Estoy bien");
        assert!(value.get("transcription").is_none());
    }

    #[test]
    fn speakable_text_prefers_short_equivalent() {
        let result = sample_result();
        assert_eq!(result.speakable_text(), "Sab thik hai");
    }

    #[test]
    fn speakable_text_falls_back_to_meaning() {
        let mut result = sample_result();
        result.equivalent = "x".repeat(120);
        assert_eq!(result.speakable_text(), "I am fine");

        result.equivalent = "   ".to_string();
        assert_eq!(result.speakable_text(), "I am fine");
    }

    #[test]
    fn clipboard_text_lists_sections() {
        let text = sample_result().to_clipboard_text();
        assert!(text.contains("Standard Meaning: I am fine"));
        assert!(text.contains("Target Insight (Bengali)"));
        assert!(text.contains("Global Link: Spanish: \"Estoy bien\""));
        assert!(text.contains("Intensity: 3/10"));
        assert!(text.contains("Origin: Bengali (Romanized)"));
    }

    #[test]
    fn clipboard_text_ends_with_attribution() {
        let text = sample_result().to_clipboard_text();
        assert!(text.ends_with("Origin: Bengali (Romanized)\n\nTranslated by LingoLens (Sana Ullah Sagar)"));

        let mut bare = sample_result();
        bare.detected_context = None;
        assert!(bare.to_clipboard_text().ends_with(EXPORT_TRAILER));
    }

    #[test]
    fn intensity_levels() {
        assert_eq!(IntensityLevel::from_intensity(1), IntensityLevel::Mild);
        assert_eq!(IntensityLevel::from_intensity(3), IntensityLevel::Mild);
        assert_eq!(IntensityLevel::from_intensity(4), IntensityLevel::Moderate);
        assert_eq!(IntensityLevel::from_intensity(6), IntensityLevel::Moderate);
        assert_eq!(IntensityLevel::from_intensity(7), IntensityLevel::Intense);
        assert_eq!(IntensityLevel::from_intensity(10), IntensityLevel::Intense);
    }

    #[test]
    fn audio_origin_detected_by_transcription() {
        let mut result = sample_result();
        assert!(!result.is_audio_origin());
        result.transcription = Some("ami bhalo achi".to_string());
        assert!(result.is_audio_origin());
    }
}
