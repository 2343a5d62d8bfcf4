//! Rodio-based speech player
//!
//! Raw PCM from the speech model is wrapped in a sample buffer. Any other
//! container goes through rodio's decoder.

use std::io::Cursor;

use async_trait::async_trait;
use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, OutputStream, Sink};
use tracing::debug;

use crate::application::ports::{AudioPlayer, PlaybackError};
use crate::domain::translation::SpeechAudio;

/// Speech output channels
const CHANNELS: u16 = 1;

/// Plays speech on the default output device
#[derive(Debug, Default)]
pub struct RodioPlayer;

impl RodioPlayer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AudioPlayer for RodioPlayer {
    async fn play(&self, audio: &SpeechAudio) -> Result<(), PlaybackError> {
        let audio = audio.clone();
        // Playback blocks until the sink drains
        tokio::task::spawn_blocking(move || play_sync(&audio))
            .await
            .map_err(|e| PlaybackError::PlaybackFailed(format!("Task join error: {}", e)))?
    }
}

fn play_sync(audio: &SpeechAudio) -> Result<(), PlaybackError> {
    let (_stream, stream_handle) = OutputStream::try_default()
        .map_err(|e| PlaybackError::DeviceNotAvailable(e.to_string()))?;

    let sink =
        Sink::try_new(&stream_handle).map_err(|e| PlaybackError::PlaybackFailed(e.to_string()))?;

    match audio.pcm_sample_rate() {
        Some(rate) => {
            debug!(rate, mime_type = audio.mime_type(), "playing raw pcm");
            sink.append(SamplesBuffer::new(CHANNELS, rate, audio.pcm_samples()));
        }
        None => {
            debug!(mime_type = audio.mime_type(), "decoding audio");
            let source = Decoder::new(Cursor::new(audio.data().to_vec()))
                .map_err(|e| PlaybackError::DecodeFailed(e.to_string()))?;
            sink.append(source);
        }
    }

    sink.sleep_until_end();

    Ok(())
}
