//! Instruction text and response schema sent with every analysis request

use serde_json::{json, Value};

use super::language::SupportedLanguage;

/// Base system instruction for all analyses
const SYSTEM_INSTRUCTION: &str = r#"You are LingoLens, a cultural translation assistant.

Always write explanations and insights in the TARGET language, the language the user wants to translate into.

Tasks:
1. Source analysis: identify the input language. If it is Romanized (for example Banglish or Hinglish), decode it.
2. Target translation: give the translation in the target language's native script and its Romanized/phonetic form.
3. Target insight: explain the cultural vibe and context in the target language.
4. User's guide: give a one-line summary in the user's INPUT language.
5. Global link: show how the same emotion is expressed in another major world language.

Output fields:
- sourceNativeScript: the input in its original alphabet
- sourcePhoneticScript: the Romanized input
- meaning: the standard meaning in the target language
- targetScript: native script of the target language
- targetPhonetic: Romanized target language
- culturalInsightTarget: cultural insight in the target language
- culturalNuance: cultural insight in English
- inputLanguageSummary: one-line summary in the input language
- intensity: emotional intensity from 1 (mild) to 10 (intense)"#;

/// The system instruction shared by text and audio requests
pub fn system_instruction() -> &'static str {
    SYSTEM_INSTRUCTION
}

/// User message for a text analysis
pub fn text_request(text: &str, target: SupportedLanguage) -> String {
    format!(
        "Analyze the following text: \"{}\". Target Language: {}.",
        text, target
    )
}

/// Instruction part accompanying inline audio
pub fn audio_request(target: SupportedLanguage) -> String {
    format!(
        "Analyze this audio. Target Language: {}. Provide transcription and cultural analysis.",
        target
    )
}

/// Structured-output schema the service must follow
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "meaning": {
                "type": "STRING",
                "description": "Standard meaning of the phrase in the target language."
            },
            "sourceNativeScript": {
                "type": "STRING",
                "description": "The phrase in its original source alphabet or script."
            },
            "sourcePhoneticScript": {
                "type": "STRING",
                "description": "Phonetic/Romanized version of the source phrase."
            },
            "targetScript": {
                "type": "STRING",
                "description": "The translation in the target language's native script."
            },
            "targetPhonetic": {
                "type": "STRING",
                "description": "Phonetic/Romanized version of the target translation."
            },
            "culturalNuance": {
                "type": "STRING",
                "description": "Cultural insight explained in English."
            },
            "culturalInsightTarget": {
                "type": "STRING",
                "description": "Cultural insight explained in the target language."
            },
            "inputLanguageSummary": {
                "type": "STRING",
                "description": "A one-line summary in the user's input language."
            },
            "intensity": {
                "type": "INTEGER",
                "description": "Intensity rating 1-10."
            },
            "equivalent": {
                "type": "STRING",
                "description": "A similar idiom or expression in the target language."
            },
            "detectedContext": {
                "type": "STRING",
                "description": "The region, dialect or language the phrase originates from."
            },
            "susInsight": {
                "type": "STRING",
                "description": "A special cultural tip."
            },
            "sagorGlobalLink": {
                "type": "OBJECT",
                "description": "How this emotion is expressed in another major global language.",
                "properties": {
                    "language": { "type": "STRING" },
                    "phrase": { "type": "STRING" },
                    "context": {
                        "type": "STRING",
                        "description": "Brief explanation of the global link."
                    }
                },
                "required": ["language", "phrase", "context"]
            },
            "transcription": {
                "type": "STRING",
                "description": "Verbatim transcription if audio is provided."
            }
        },
        "required": [
            "meaning",
            "sourceNativeScript",
            "sourcePhoneticScript",
            "targetScript",
            "targetPhonetic",
            "culturalNuance",
            "culturalInsightTarget",
            "inputLanguageSummary",
            "intensity",
            "equivalent",
            "detectedContext",
            "sagorGlobalLink",
            "susInsight"
        ]
    })
}
