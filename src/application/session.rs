//! Translator session use case
//!
//! Composes the request orchestrator and the history store around the
//! session state machine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::domain::history::HistoryItem;
use crate::domain::session::{AnalysisStatus, SessionState, SubmitRejection};
use crate::domain::translation::{AudioData, SupportedLanguage, TranslationResult};

use super::history::HistoryStore;
use super::orchestrator::{play_logged, AnalyzeError, RequestOrchestrator, TtsError};
use super::ports::{AudioPlayer, KeyValueStore, StorageError, TranslationService};

/// Called with `(from, to)` on every status change
pub type TransitionCallback = Box<dyn Fn(AnalysisStatus, AnalysisStatus) + Send + Sync>;

/// Outcome of [`TranslatorSession::submit`]
#[derive(Debug)]
pub enum SubmitOutcome {
    /// No request was issued; state is unchanged
    Rejected(SubmitRejection),
    /// The request succeeded; the result is current and recorded in history
    Completed(TranslationResult),
    /// The request failed; the session is in the error state
    Failed(AnalyzeError),
}

/// Outcome of [`TranslatorSession::speak`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakOutcome {
    /// Playback is running in the background
    Started,
    AlreadyPlaying,
    NoResult,
}

/// Sets the playing flag for its lifetime
struct PlayingGuard(Arc<AtomicBool>);

impl PlayingGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for PlayingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Interactive translation session
pub struct TranslatorSession<T, S, P>
where
    T: TranslationService,
    S: KeyValueStore,
    P: AudioPlayer,
{
    state: SessionState,
    orchestrator: RequestOrchestrator<T, P>,
    history: HistoryStore<S>,
    playing: Arc<AtomicBool>,
    playback: Mutex<Option<JoinHandle<()>>>,
    on_transition: Option<TransitionCallback>,
}

impl<T, S, P> TranslatorSession<T, S, P>
where
    T: TranslationService,
    S: KeyValueStore,
    P: AudioPlayer,
{
    pub fn new(
        orchestrator: RequestOrchestrator<T, P>,
        history: HistoryStore<S>,
        target: SupportedLanguage,
    ) -> Self {
        Self {
            state: SessionState::new(target),
            orchestrator,
            history,
            playing: Arc::new(AtomicBool::new(false)),
            playback: Mutex::new(None),
            on_transition: None,
        }
    }

    /// Register a listener for status changes
    pub fn with_transition_callback(mut self, callback: TransitionCallback) -> Self {
        self.on_transition = Some(callback);
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn status(&self) -> AnalysisStatus {
        self.state.status()
    }

    pub fn result(&self) -> Option<&TranslationResult> {
        self.state.result()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn history(&self) -> &[HistoryItem] {
        self.history.list()
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.set_text(text);
    }

    pub fn select_audio(&mut self, audio: AudioData) {
        self.state.select_audio(audio);
    }

    pub fn clear_audio(&mut self) {
        self.state.clear_audio();
    }

    pub fn set_target(&mut self, target: SupportedLanguage) {
        self.state.set_target(target);
    }

    /// Run one analysis of the current input.
    ///
    /// Rejected without a request when there is no input or one is already
    /// in flight. On success the result becomes current and is appended to
    /// history; a history write failure is logged only.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let from = self.state.status();
        let input = match self.state.begin_analysis() {
            Ok(input) => input,
            Err(rejection) => {
                debug!(?rejection, "submission rejected");
                return SubmitOutcome::Rejected(rejection);
            }
        };
        self.notify(from, AnalysisStatus::Analyzing);

        let target = self.state.target();
        match self.orchestrator.analyze(&input, target).await {
            Ok(result) => {
                if let Err(e) = self.state.complete_analysis(result.clone()) {
                    error!(error = %e, "session left analyzing state early");
                }
                if let Err(e) = self.history.append(result.clone()) {
                    warn!(error = %e, "failed to persist history");
                }
                self.notify(AnalysisStatus::Analyzing, AnalysisStatus::Idle);
                SubmitOutcome::Completed(result)
            }
            Err(e) => {
                if let Err(transition) = self.state.fail_analysis() {
                    error!(error = %transition, "session left analyzing state early");
                }
                self.notify(AnalysisStatus::Analyzing, AnalysisStatus::Error);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Show a stored item. Issues no request and leaves history untouched.
    /// Returns false when the id is unknown.
    pub fn load_history_item(&mut self, id: &str) -> bool {
        let Some(item) = self.history.get(id).cloned() else {
            return false;
        };
        self.state.load_history_item(&item);
        true
    }

    pub fn clear_history(&mut self) -> Result<(), StorageError> {
        self.history.clear()
    }

    /// Speak the current result's speakable text.
    ///
    /// Returns once the audio is synthesized; playback continues on a
    /// background task that holds the playing flag, so the session stays
    /// free for new submissions. Ignored while speech is already playing.
    /// Playback failures are logged only.
    pub async fn speak(&self) -> Result<SpeakOutcome, TtsError>
    where
        P: 'static,
    {
        let Some(result) = self.state.result() else {
            return Ok(SpeakOutcome::NoResult);
        };
        let Some(guard) = PlayingGuard::acquire(&self.playing) else {
            return Ok(SpeakOutcome::AlreadyPlaying);
        };

        let audio = self
            .orchestrator
            .synthesize_speech(result.speakable_text())
            .await?;

        let player = self.orchestrator.player();
        let handle = tokio::spawn(async move {
            let _guard = guard;
            play_logged(player.as_ref(), &audio).await;
        });
        *self.playback.lock().unwrap_or_else(PoisonError::into_inner) = Some(handle);

        Ok(SpeakOutcome::Started)
    }

    /// Wait for background playback started by [`Self::speak`] to finish
    pub async fn wait_for_playback(&self) {
        let handle = self
            .playback
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!(error = %e, "playback task ended abnormally");
            }
        }
    }

    fn notify(&self, from: AnalysisStatus, to: AnalysisStatus) {
        debug!(%from, %to, "session transition");
        if let Some(ref cb) = self.on_transition {
            cb(from, to);
        }
    }
}
