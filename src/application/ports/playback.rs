//! Audio playback port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::translation::SpeechAudio;

/// Errors that can occur during playback
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// The bytes could not be decoded
    #[error("Failed to decode audio: {0}")]
    DecodeFailed(String),

    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Port for the host audio output
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Play the audio to completion
    async fn play(&self, audio: &SpeechAudio) -> Result<(), PlaybackError>;
}

#[async_trait]
impl AudioPlayer for Box<dyn AudioPlayer> {
    async fn play(&self, audio: &SpeechAudio) -> Result<(), PlaybackError> {
        self.as_ref().play(audio).await
    }
}
