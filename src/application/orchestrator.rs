//! Request orchestrator use case

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::error::{SchemaError, ValidationError};
use crate::domain::translation::{
    validate_payload, AnalysisInput, SpeechAudio, SupportedLanguage, TranslationResult,
};

use super::ports::{AudioPlayer, ServiceError, TranslationService};

/// Failure of a request that reached the service
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    /// Service unreachable or answered with a non-success status
    #[error("Service request failed: {0}")]
    Service(#[from] ServiceError),

    /// Service answered, but the payload does not match the schema
    #[error("Service returned a malformed result: {0}")]
    Schema(#[from] SchemaError),
}

/// Errors from [`RequestOrchestrator::analyze`]
#[derive(Debug, Clone, Error)]
pub enum AnalyzeError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Errors from speech synthesis
#[derive(Debug, Clone, Error)]
pub enum TtsError {
    #[error("Nothing to speak")]
    EmptyText,

    #[error("No audio data generated")]
    NoAudio,

    #[error("Speech request failed: {0}")]
    Service(#[from] ServiceError),
}

/// Issues analysis and speech requests against the service and plays audio
pub struct RequestOrchestrator<T, P>
where
    T: TranslationService,
    P: AudioPlayer,
{
    service: T,
    player: Arc<P>,
}

impl<T, P> RequestOrchestrator<T, P>
where
    T: TranslationService,
    P: AudioPlayer,
{
    pub fn new(service: T, player: P) -> Self {
        Self {
            service,
            player: Arc::new(player),
        }
    }

    /// Shared handle to the player, for playback that outlives a borrow
    pub fn player(&self) -> Arc<P> {
        Arc::clone(&self.player)
    }

    /// Run one analysis. Exactly one service call is made for valid input,
    /// none for invalid input. Nothing is retried.
    pub async fn analyze(
        &self,
        input: &AnalysisInput,
        target: SupportedLanguage,
    ) -> Result<TranslationResult, AnalyzeError> {
        input.validate()?;

        debug!(%target, audio = input.is_audio(), "sending analysis request");
        let raw = match input {
            AnalysisInput::Text { text } => self.service.analyze_text(text, target).await,
            AnalysisInput::Audio(audio) => self.service.analyze_audio(audio, target).await,
        }
        .map_err(|e| {
            warn!(error = %e, "analysis request failed");
            RequestError::Service(e)
        })?;

        let payload = validate_payload(&raw).map_err(|e| {
            warn!(error = %e, "analysis response failed validation");
            RequestError::Schema(e)
        })?;

        Ok(TranslationResult::from_payload(
            payload,
            input.original_text(),
            target,
        ))
    }

    /// Synthesize speech for a short text
    pub async fn synthesize_speech(&self, text: &str) -> Result<SpeechAudio, TtsError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TtsError::EmptyText);
        }

        debug!(chars = text.chars().count(), "requesting speech synthesis");
        let audio = self
            .service
            .synthesize_speech(text)
            .await?
            .filter(|audio| !audio.data().is_empty())
            .ok_or(TtsError::NoAudio)?;

        Ok(audio)
    }

    /// Play audio through the host output. Failures are logged, never returned.
    pub async fn play_audio(&self, audio: &SpeechAudio) {
        play_logged(self.player.as_ref(), audio).await;
    }
}

/// Play to completion, logging instead of returning a failure
pub async fn play_logged<P: AudioPlayer + ?Sized>(player: &P, audio: &SpeechAudio) {
    if let Err(e) = player.play(audio).await {
        warn!(error = %e, "audio playback failed");
    }
}
