//! Analysis input value object

use crate::domain::error::ValidationError;

use super::audio::AudioData;

/// `originalText` recorded for audio requests
pub const AUDIO_INPUT_PLACEHOLDER: &str = "Audio Input";

/// One analysis request's input: either typed text or an audio clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Text { text: String },
    Audio(AudioData),
}

impl AnalysisInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn audio(audio: AudioData) -> Self {
        Self::Audio(audio)
    }

    /// Check the input can be sent. Text must be non-blank; audio must have
    /// bytes and a MIME type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Text { text } if text.trim().is_empty() => Err(ValidationError::EmptyText),
            Self::Text { .. } => Ok(()),
            Self::Audio(audio) => audio.validate(),
        }
    }

    /// The value echoed back as the result's `originalText`
    pub fn original_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
            Self::Audio(_) => AUDIO_INPUT_PLACEHOLDER,
        }
    }

    pub fn is_audio(&self) -> bool {
        matches!(self, Self::Audio(_))
    }
}
