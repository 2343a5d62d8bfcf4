//! Infrastructure layer - Adapter implementations
//!
//! Concrete implementations of the port interfaces: the Gemini API,
//! local storage, audio output and the system clipboard.

pub mod clipboard;
pub mod config;
pub mod gemini;
pub mod playback;
pub mod storage;

// Re-export adapters
pub use clipboard::ArboardClipboard;
pub use config::XdgConfigStore;
pub use gemini::{GeminiClient, GeminiModels};
pub use playback::{create_player, NoOpPlayer, RodioPlayer};
pub use storage::{FileStore, MemoryStore};
