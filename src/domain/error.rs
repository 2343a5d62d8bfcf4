//! Domain error types

use thiserror::Error;

/// Error when a target language name is not one of the supported languages
#[derive(Debug, Clone, Error)]
#[error("Unsupported language: \"{input}\". Run 'lingo-lens languages' to see the supported list")]
pub struct LanguageParseError {
    pub input: String,
}

/// Error when local input is empty or malformed. Never reaches the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Text input is empty")]
    EmptyText,

    #[error("Audio input is empty")]
    EmptyAudio,

    #[error("Audio input has no MIME type")]
    MissingMimeType,

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),
}

/// Error when the service payload does not match the translation schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Payload is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Payload is not a JSON object")]
    NotAnObject,

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
