//! Player used when speech output is disabled

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{AudioPlayer, PlaybackError};
use crate::domain::translation::SpeechAudio;

/// Discards audio
#[derive(Debug, Default)]
pub struct NoOpPlayer;

impl NoOpPlayer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AudioPlayer for NoOpPlayer {
    async fn play(&self, audio: &SpeechAudio) -> Result<(), PlaybackError> {
        debug!(bytes = audio.data().len(), "playback disabled, dropping audio");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn noop_returns_ok() {
        let player = NoOpPlayer::new();
        let audio = SpeechAudio::new(vec![0, 0], "audio/L16;rate=24000");
        assert!(player.play(&audio).await.is_ok());
    }
}
