//! Key-value storage port interface

use thiserror::Error;

/// Storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to read '{key}': {message}")]
    ReadFailed { key: String, message: String },

    #[error("Failed to write '{key}': {message}")]
    WriteFailed { key: String, message: String },

    #[error("Failed to remove '{key}': {message}")]
    RemoveFailed { key: String, message: String },

    #[error("Failed to serialize '{key}': {message}")]
    SerializeFailed { key: String, message: String },
}

/// Port for durable string storage keyed by name.
/// Each write replaces the whole value.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store a value, replacing any prior value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the key entirely. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
