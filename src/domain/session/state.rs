//! Translator session state machine

use std::fmt;
use thiserror::Error;

use crate::domain::error::ValidationError;
use crate::domain::history::HistoryItem;
use crate::domain::translation::{AnalysisInput, AudioData, SupportedLanguage, TranslationResult};

/// User-facing message for any failed analysis
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze. Please try again.";

/// Request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisStatus {
    #[default]
    Idle,
    Analyzing,
    Error,
}

impl AnalysisStatus {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Analyzing => "analyzing",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_state} state")]
pub struct InvalidStateTransition {
    pub current_state: AnalysisStatus,
    pub action: String,
}

/// Why a submission did not start a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Neither text nor audio is selected
    NothingToSubmit,
    /// The selected input cannot be sent
    Invalid(ValidationError),
    /// A request is already in flight
    Busy,
}

/// Session entity.
/// Holds the input selection, target language, request status and the
/// result currently on display.
///
/// State machine:
///   IDLE -> ANALYZING (begin_analysis)
///   ERROR -> ANALYZING (begin_analysis, clears the error)
///   ANALYZING -> IDLE (complete_analysis)
///   ANALYZING -> ERROR (fail_analysis)
#[derive(Debug, Default)]
pub struct SessionState {
    status: AnalysisStatus,
    text: String,
    audio: Option<AudioData>,
    target: SupportedLanguage,
    result: Option<TranslationResult>,
    error: Option<String>,
}

impl SessionState {
    /// Create a new idle session
    pub fn new(target: SupportedLanguage) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    pub fn status(&self) -> AnalysisStatus {
        self.status
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn audio(&self) -> Option<&AudioData> {
        self.audio.as_ref()
    }

    pub fn target(&self) -> SupportedLanguage {
        self.target
    }

    pub fn result(&self) -> Option<&TranslationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether submit is currently enabled
    pub fn can_submit(&self) -> bool {
        self.status != AnalysisStatus::Analyzing
            && (self.audio.is_some() || !self.text.trim().is_empty())
    }

    /// Replace the text input. Non-empty text deselects any audio.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if !self.text.is_empty() {
            self.audio = None;
        }
    }

    /// Select an audio clip, clearing the text input
    pub fn select_audio(&mut self, audio: AudioData) {
        self.audio = Some(audio);
        self.text.clear();
    }

    pub fn clear_audio(&mut self) {
        self.audio = None;
    }

    pub fn set_target(&mut self, target: SupportedLanguage) {
        self.target = target;
    }

    /// Show a stored item without touching history or the request status
    pub fn load_history_item(&mut self, item: &HistoryItem) {
        let result = item.result().clone();
        self.text = if result.is_audio_origin() {
            String::new()
        } else {
            result.original_text.clone()
        };
        self.audio = None;
        self.target = result.target_language;
        self.result = Some(result);
    }

    /// Transition to ANALYZING and produce the input to send.
    /// Audio takes precedence over text when both are somehow set.
    pub fn begin_analysis(&mut self) -> Result<AnalysisInput, SubmitRejection> {
        if self.status == AnalysisStatus::Analyzing {
            return Err(SubmitRejection::Busy);
        }

        let input = match (&self.audio, self.text.trim().is_empty()) {
            (Some(audio), _) => AnalysisInput::audio(audio.clone()),
            (None, false) => AnalysisInput::text(self.text.clone()),
            (None, true) => return Err(SubmitRejection::NothingToSubmit),
        };
        input.validate().map_err(SubmitRejection::Invalid)?;

        self.status = AnalysisStatus::Analyzing;
        self.error = None;
        self.result = None;
        Ok(input)
    }

    /// Transition from ANALYZING to IDLE with a result
    pub fn complete_analysis(
        &mut self,
        result: TranslationResult,
    ) -> Result<(), InvalidStateTransition> {
        self.require_analyzing("complete analysis")?;
        self.result = Some(result);
        self.status = AnalysisStatus::Idle;
        Ok(())
    }

    /// Transition from ANALYZING to ERROR
    pub fn fail_analysis(&mut self) -> Result<(), InvalidStateTransition> {
        self.require_analyzing("fail analysis")?;
        self.result = None;
        self.error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
        self.status = AnalysisStatus::Error;
        Ok(())
    }

    fn require_analyzing(&self, action: &str) -> Result<(), InvalidStateTransition> {
        if self.status != AnalysisStatus::Analyzing {
            return Err(InvalidStateTransition {
                current_state: self.status,
                action: action.to_string(),
            });
        }
        Ok(())
    }
}
