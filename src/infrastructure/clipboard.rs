//! System clipboard adapter backed by arboard

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{Clipboard, ClipboardError};

/// Copies result exports to the system clipboard
#[derive(Debug, Default)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        debug!(bytes = text.len(), "copying to clipboard");

        // arboard blocks on some platforms
        tokio::task::spawn_blocking(move || {
            arboard::Clipboard::new()
                .map_err(|e| ClipboardError::ClipboardUnavailable(e.to_string()))?
                .set_text(text)
                .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::CopyFailed(format!("Task join error: {}", e)))?
    }
}
