//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod playback;
pub mod storage;
pub mod translation;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use playback::{AudioPlayer, PlaybackError};
pub use storage::{KeyValueStore, StorageError};
pub use translation::{ServiceError, TranslationService};
