//! Audio value objects

use std::path::Path;

use base64::Engine;

use crate::domain::error::ValidationError;

/// Known audio file extensions and their MIME types
const EXTENSION_MIME_TYPES: &[(&str, &str)] = &[
    ("mp3", "audio/mp3"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("oga", "audio/ogg"),
    ("opus", "audio/ogg"),
    ("flac", "audio/flac"),
    ("webm", "audio/webm"),
    ("m4a", "audio/mp4"),
    ("mp4", "audio/mp4"),
    ("aac", "audio/aac"),
    ("aiff", "audio/aiff"),
];

/// Sample rate assumed for raw PCM speech when the MIME type omits it
const DEFAULT_PCM_SAMPLE_RATE: u32 = 24_000;

/// Strip a `data:<mime>;base64,` prefix if present
pub fn strip_data_uri_prefix(encoded: &str) -> &str {
    if encoded.starts_with("data:") {
        match encoded.split_once(',') {
            Some((_, rest)) => rest,
            None => encoded,
        }
    } else {
        encoded
    }
}

/// Raw audio selected by the user, with its MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    data: Vec<u8>,
    mime_type: String,
}

impl AudioData {
    /// Create AudioData from raw bytes
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Decode a `data:<mime>;base64,<payload>` URL
    pub fn from_data_url(url: &str) -> Result<Self, ValidationError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| ValidationError::InvalidDataUrl("missing 'data:' scheme".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ValidationError::InvalidDataUrl("missing ',' separator".to_string()))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| ValidationError::InvalidDataUrl("payload is not base64".to_string()))?;

        let data = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| ValidationError::InvalidDataUrl(e.to_string()))?;

        Ok(Self::new(data, mime_type))
    }

    /// Guess the MIME type from a file extension
    pub fn mime_type_for_path(path: &Path) -> Option<&'static str> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        EXTENSION_MIME_TYPES
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, mime)| *mime)
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }

    /// Encode the audio for the wire: plain base64 with no data-URI prefix
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data.is_empty() {
            return Err(ValidationError::EmptyAudio);
        }
        if self.mime_type.trim().is_empty() {
            return Err(ValidationError::MissingMimeType);
        }
        Ok(())
    }
}

/// Synthesized speech returned by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechAudio {
    data: Vec<u8>,
    mime_type: String,
}

impl SpeechAudio {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// For raw 16-bit PCM (`audio/L16;codec=pcm;rate=24000`), the sample rate.
    /// `None` means the bytes are a container format and must be decoded.
    pub fn pcm_sample_rate(&self) -> Option<u32> {
        let mut params = self.mime_type.split(';').map(str::trim);
        let essence = params.next()?.to_lowercase();
        if essence != "audio/l16" && essence != "audio/pcm" {
            return None;
        }

        let rate = params
            .filter_map(|p| p.split_once('='))
            .find(|(key, _)| key.eq_ignore_ascii_case("rate"))
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or(DEFAULT_PCM_SAMPLE_RATE);
        Some(rate)
    }

    /// Interpret the bytes as little-endian 16-bit samples
    pub fn pcm_samples(&self) -> Vec<i16> {
        self.data
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    }
}
