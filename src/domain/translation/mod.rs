//! Translation domain module

mod audio;
mod input;
mod language;
pub mod prompt;
mod result;
mod schema;

pub use audio::{strip_data_uri_prefix, AudioData, SpeechAudio};
pub use input::{AnalysisInput, AUDIO_INPUT_PLACEHOLDER};
pub use language::{Region, SupportedLanguage};
pub use result::{
    GlobalLink, IntensityLevel, TranslationPayload, TranslationResult, MAX_INTENSITY,
    MIN_INTENSITY,
};
pub use schema::validate_payload;

/// Example phrases offered when there is nothing to analyze
pub const SUGGESTIONS: &[&str] = &[
    "Ami bhalo achi",
    "Ki obostha?",
    "Kya haal hai?",
    "Goyna gachh",
    "Adda",
];

#[cfg(test)]
pub(crate) use result::tests::{sample_payload, sample_result};
