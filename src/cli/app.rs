//! Main app runner for one-shot analysis

use std::env;
use std::path::Path;
use std::process::ExitCode;

use indicatif::ProgressBar;
use tracing::{debug, warn};

use crate::application::ports::{Clipboard, ConfigStore};
use crate::application::{
    AnalyzeError, HistoryStore, RequestOrchestrator, SpeakOutcome, SubmitOutcome, TransitionCallback,
    TranslatorSession,
};
use crate::domain::config::AppConfig;
use crate::domain::session::{AnalysisStatus, SubmitRejection, ANALYSIS_FAILED_MESSAGE};
use crate::domain::translation::{AudioData, TranslationResult, SUGGESTIONS};
use crate::infrastructure::{
    create_player, ArboardClipboard, FileStore, GeminiClient, GeminiModels, XdgConfigStore,
};

use super::args::AnalyzeOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

const MISSING_API_KEY: &str = "Missing API key. Set GEMINI_API_KEY environment variable or run 'lingo-lens config set api_key <key>'";

/// Run one analysis and present the result
pub async fn run_analyze(options: AnalyzeOptions, api_key: Option<String>) -> ExitCode {
    let presenter = Presenter::new();

    let api_key = match api_key.filter(|k| !k.trim().is_empty()) {
        Some(key) => key,
        None => {
            presenter.error(MISSING_API_KEY);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let audio = match options.audio.as_deref() {
        Some(path) => match read_audio(path).await {
            Ok(audio) => Some(audio),
            Err((code, message)) => {
                presenter.error(&message);
                return ExitCode::from(code);
            }
        },
        None => None,
    };

    // Create adapters
    let service = GeminiClient::with_models(api_key, options.models.clone());
    let player = create_player(options.speak);
    let history = HistoryStore::load(FileStore::new());

    let spinner = presenter.analysis_spinner();
    let mut session = TranslatorSession::new(
        RequestOrchestrator::new(service, player),
        history,
        options.target,
    )
    .with_transition_callback(spinner_callback(spinner, options.target.name()));

    if let Some(audio) = audio {
        session.select_audio(audio);
    } else if let Some(text) = options.text.as_deref() {
        session.set_text(text);
    }

    let result = match session.submit().await {
        SubmitOutcome::Completed(result) => result,
        SubmitOutcome::Rejected(SubmitRejection::NothingToSubmit) => {
            presenter.suggestions(SUGGESTIONS);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
        SubmitOutcome::Rejected(SubmitRejection::Invalid(e)) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
        SubmitOutcome::Rejected(SubmitRejection::Busy) => {
            presenter.error("An analysis is already running");
            return ExitCode::from(EXIT_ERROR);
        }
        SubmitOutcome::Failed(e) => {
            presenter.error(failure_message(session.error(), &e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Err(code) = print_result(&presenter, &result, options.json) {
        return ExitCode::from(code);
    }

    if options.clipboard {
        match ArboardClipboard::new().copy(&result.to_clipboard_text()).await {
            Ok(()) => presenter.info("Copied to clipboard"),
            Err(e) => presenter.warn(&e.to_string()),
        }
    }

    if options.speak {
        match session.speak().await {
            Ok(SpeakOutcome::Started) => {
                session.wait_for_playback().await;
                debug!("speech played");
            }
            Ok(outcome) => debug!(?outcome, "speech skipped"),
            Err(e) => presenter.warn(&format!("Could not speak result: {}", e)),
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// User-facing line for a failed analysis. The cause goes to the log only.
fn failure_message<'a>(session_error: Option<&'a str>, error: &AnalyzeError) -> &'a str {
    warn!(error = %error, "analysis failed");
    session_error.unwrap_or(ANALYSIS_FAILED_MESSAGE)
}

fn print_result(
    presenter: &Presenter,
    result: &TranslationResult,
    json: bool,
) -> Result<(), u8> {
    if json {
        let out = serde_json::to_string_pretty(result).map_err(|e| {
            presenter.error(&format!("Failed to serialize result: {}", e));
            EXIT_ERROR
        })?;
        presenter.output(&out);
    } else {
        presenter.result(result);
    }
    Ok(())
}

/// Load an audio file, inferring its MIME type from the extension
async fn read_audio(path: &Path) -> Result<AudioData, (u8, String)> {
    let mime_type = AudioData::mime_type_for_path(path).ok_or_else(|| {
        (
            EXIT_USAGE_ERROR,
            format!("Unsupported audio file type: {}", path.display()),
        )
    })?;

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        (
            EXIT_ERROR,
            format!("Failed to read {}: {}", path.display(), e),
        )
    })?;

    let audio = AudioData::new(bytes, mime_type);
    debug!(size = %audio.human_readable_size(), mime_type, "audio loaded");
    Ok(audio)
}

/// Drive the spinner from session transitions
fn spinner_callback(spinner: ProgressBar, target: &'static str) -> TransitionCallback {
    Box::new(move |_from, to| match to {
        AnalysisStatus::Analyzing => {
            Presenter::start_spinner(&spinner, &format!("Analyzing for {}...", target))
        }
        AnalysisStatus::Idle => Presenter::spinner_success(&spinner, "Analysis complete"),
        AnalysisStatus::Error => Presenter::spinner_fail(&spinner, "Analysis failed"),
    })
}

/// Gemini models and voice from merged config
pub fn models_from_config(config: &AppConfig) -> GeminiModels {
    GeminiModels {
        text: config.text_model_or_default().to_string(),
        audio: config.audio_model_or_default().to_string(),
        tts: config.tts_model_or_default().to_string(),
        voice: config.voice_or_default().to_string(),
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config file");
        AppConfig::empty()
    });

    // Build env config
    let env_config = AppConfig {
        api_key: env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
