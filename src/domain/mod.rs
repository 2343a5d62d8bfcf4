//! Domain layer - Core business logic
//!
//! Contains value objects, entities, validation and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod history;
pub mod session;
pub mod translation;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use history::{HistoryItem, HistoryLog, MAX_HISTORY_ITEMS};
pub use session::{AnalysisStatus, SessionState};
pub use translation::{
    AnalysisInput, AudioData, GlobalLink, Region, SpeechAudio, SupportedLanguage,
    TranslationResult,
};
