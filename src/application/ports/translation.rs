//! Translation service port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::translation::{AudioData, SpeechAudio, SupportedLanguage};

/// Errors talking to the external service
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty response from service")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for the hosted language model.
///
/// Analysis calls return the raw JSON text the model produced; validating it
/// is the caller's job.
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Analyze typed text for the given target language
    async fn analyze_text(
        &self,
        text: &str,
        target: SupportedLanguage,
    ) -> Result<String, ServiceError>;

    /// Analyze an audio clip for the given target language
    async fn analyze_audio(
        &self,
        audio: &AudioData,
        target: SupportedLanguage,
    ) -> Result<String, ServiceError>;

    /// Synthesize speech. `Ok(None)` means the service answered without audio.
    async fn synthesize_speech(&self, text: &str) -> Result<Option<SpeechAudio>, ServiceError>;
}
