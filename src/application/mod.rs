//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod history;
pub mod orchestrator;
pub mod ports;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

// Re-export use cases
pub use history::{HistoryStore, HISTORY_STORAGE_KEY};
pub use orchestrator::{AnalyzeError, RequestError, RequestOrchestrator, TtsError};
pub use session::{SpeakOutcome, SubmitOutcome, TransitionCallback, TranslatorSession};
