//! Test doubles shared by the use case tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;

use crate::domain::translation::{AudioData, SpeechAudio, SupportedLanguage};

use super::ports::{
    AudioPlayer, KeyValueStore, PlaybackError, ServiceError, StorageError, TranslationService,
};

pub(crate) fn valid_payload_json() -> String {
    json!({
        "meaning": "I am fine",
        "sourceNativeScript": "আমি ভালো আছি",
        "sourcePhoneticScript": "Ami bhalo achi",
        "targetScript": "আমি ভালো আছি",
        "targetPhonetic": "Ami bhalo achi",
        "culturalNuance": "Everyday reassurance.",
        "culturalInsightTarget": "সাধারণ আশ্বাস।",
        "inputLanguageSummary": "Ami thik achi.",
        "intensity": 3,
        "equivalent": "Sab thik hai",
        "detectedContext": "Bengali (Romanized)",
        "sagorGlobalLink": {
            "language": "Spanish",
            "phrase": "Estoy bien",
            "context": "Casual reassurance."
        }
    })
    .to_string()
}

/// Per-operation call counts, shared with the test after the mock is moved
#[derive(Debug, Clone, Default)]
pub(crate) struct Calls {
    text: Arc<AtomicUsize>,
    audio: Arc<AtomicUsize>,
    speech: Arc<AtomicUsize>,
}

impl Calls {
    pub(crate) fn text(&self) -> usize {
        self.text.load(Ordering::SeqCst)
    }

    pub(crate) fn audio(&self) -> usize {
        self.audio.load(Ordering::SeqCst)
    }

    pub(crate) fn speech(&self) -> usize {
        self.speech.load(Ordering::SeqCst)
    }

    pub(crate) fn total(&self) -> usize {
        self.text() + self.audio() + self.speech()
    }
}

pub(crate) struct MockService {
    reply: Result<String, ServiceError>,
    speech: Result<Option<SpeechAudio>, ServiceError>,
    calls: Calls,
}

impl MockService {
    pub(crate) fn replying(json: impl Into<String>) -> Self {
        Self {
            reply: Ok(json.into()),
            speech: Ok(Some(SpeechAudio::new(
                vec![0, 1, 0, 1],
                "audio/L16;codec=pcm;rate=24000",
            ))),
            calls: Calls::default(),
        }
    }

    pub(crate) fn failing(error: ServiceError) -> Self {
        Self {
            reply: Err(error.clone()),
            speech: Err(error),
            calls: Calls::default(),
        }
    }

    pub(crate) fn without_speech(mut self) -> Self {
        self.speech = Ok(None);
        self
    }

    pub(crate) fn calls(&self) -> Calls {
        self.calls.clone()
    }
}

#[async_trait]
impl TranslationService for MockService {
    async fn analyze_text(
        &self,
        _text: &str,
        _target: SupportedLanguage,
    ) -> Result<String, ServiceError> {
        self.calls.text.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }

    async fn analyze_audio(
        &self,
        _audio: &AudioData,
        _target: SupportedLanguage,
    ) -> Result<String, ServiceError> {
        self.calls.audio.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }

    async fn synthesize_speech(&self, _text: &str) -> Result<Option<SpeechAudio>, ServiceError> {
        self.calls.speech.fetch_add(1, Ordering::SeqCst);
        self.speech.clone()
    }
}

#[derive(Default)]
pub(crate) struct MockPlayer {
    fail: bool,
    plays: Arc<AtomicUsize>,
    gate: Option<Arc<Notify>>,
}

impl MockPlayer {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Player whose playback lasts until the returned handle is notified
    pub(crate) fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let player = Self {
            gate: Some(Arc::clone(&gate)),
            ..Self::default()
        };
        (player, gate)
    }

    pub(crate) fn plays(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.plays)
    }
}

#[async_trait]
impl AudioPlayer for MockPlayer {
    async fn play(&self, _audio: &SpeechAudio) -> Result<(), PlaybackError> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail {
            Err(PlaybackError::DeviceNotAvailable("no device".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Key-value store that reads nothing and rejects every write
pub(crate) struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteFailed {
            key: key.to_string(),
            message: "disk full".to_string(),
        })
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
