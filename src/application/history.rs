//! History store use case

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::domain::history::{HistoryItem, HistoryLog};
use crate::domain::translation::TranslationResult;

use super::ports::{KeyValueStore, StorageError};

/// Storage key holding the serialized history
pub const HISTORY_STORAGE_KEY: &str = "lingolens_history";

/// Bounded, newest-first log of past results, persisted as one JSON array
pub struct HistoryStore<S: KeyValueStore> {
    storage: S,
    log: HistoryLog,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load history from storage.
    ///
    /// Unreadable or corrupt content is discarded and the store starts empty.
    pub fn load(storage: S) -> Self {
        let log = match storage.get(HISTORY_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryItem>>(&raw) {
                Ok(items) => HistoryLog::from_items(items),
                Err(e) => {
                    warn!(error = %e, "discarding corrupt history");
                    if let Err(e) = storage.remove(HISTORY_STORAGE_KEY) {
                        warn!(error = %e, "failed to remove corrupt history");
                    }
                    HistoryLog::new()
                }
            },
            Ok(None) => HistoryLog::new(),
            Err(e) => {
                warn!(error = %e, "history unreadable, starting empty");
                HistoryLog::new()
            }
        };

        debug!(items = log.len(), "history loaded");
        Self { storage, log }
    }

    /// Record a result as the newest item and persist the whole log.
    ///
    /// The in-memory log is updated even when the write fails.
    pub fn append(&mut self, result: TranslationResult) -> Result<HistoryItem, StorageError> {
        let timestamp = self.next_timestamp();
        let item = HistoryItem::new(result, timestamp);

        let evicted = self.log.push_front(item.clone());
        if !evicted.is_empty() {
            debug!(evicted = evicted.len(), "evicted oldest history items");
        }

        self.persist()?;
        Ok(item)
    }

    /// Drop every item and remove the stored value entirely
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.log.clear();
        self.storage.remove(HISTORY_STORAGE_KEY)
    }

    /// Items, newest first
    pub fn list(&self) -> &[HistoryItem] {
        self.log.items()
    }

    pub fn get(&self, id: &str) -> Option<&HistoryItem> {
        self.log.get(id)
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(self.log.items()).map_err(|e| {
            StorageError::SerializeFailed {
                key: HISTORY_STORAGE_KEY.to_string(),
                message: e.to_string(),
            }
        })?;
        self.storage.set(HISTORY_STORAGE_KEY, &json)
    }

    /// Current wall-clock time, never earlier than the newest item so the log
    /// stays ordered if the clock steps back.
    fn next_timestamp(&self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        match self.log.newest() {
            Some(newest) => now.max(newest.timestamp()),
            None => now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FailingStore;
    use crate::domain::history::MAX_HISTORY_ITEMS;
    use crate::domain::translation::sample_result;
    use crate::infrastructure::storage::MemoryStore;

    fn result(text: &str) -> TranslationResult {
        let mut result = sample_result();
        result.original_text = text.to_string();
        result
    }

    #[test]
    fn empty_storage_loads_empty() {
        let store = HistoryStore::load(MemoryStore::new());
        assert!(store.is_empty());
    }

    #[test]
    fn length_is_min_of_appends_and_capacity() {
        for n in [0usize, 1, 5, 10, 11, 25] {
            let mut store = HistoryStore::load(MemoryStore::new());
            for i in 0..n {
                store.append(result(&format!("phrase {}", i))).unwrap();
            }
            assert_eq!(store.len(), n.min(MAX_HISTORY_ITEMS));
        }
    }

    #[test]
    fn newest_first_with_non_increasing_timestamps() {
        let mut store = HistoryStore::load(MemoryStore::new());
        for i in 0..4 {
            store.append(result(&format!("phrase {}", i))).unwrap();
        }

        let texts: Vec<&str> = store
            .list()
            .iter()
            .map(|item| item.result().original_text.as_str())
            .collect();
        assert_eq!(texts, vec!["phrase 3", "phrase 2", "phrase 1", "phrase 0"]);

        for pair in store.list().windows(2) {
            assert!(pair[0].timestamp() >= pair[1].timestamp());
        }
    }

    #[test]
    fn eleventh_append_evicts_oldest() {
        let mut store = HistoryStore::load(MemoryStore::new());
        let first = store.append(result("first")).unwrap();
        for i in 0..10 {
            store.append(result(&format!("phrase {}", i))).unwrap();
        }

        assert_eq!(store.len(), MAX_HISTORY_ITEMS);
        assert!(store.get(first.id()).is_none());
        assert_eq!(store.list()[0].result().original_text, "phrase 9");
    }

    #[test]
    fn identical_inputs_are_not_deduplicated() {
        let mut store = HistoryStore::load(MemoryStore::new());
        let a = store.append(result("Adda")).unwrap();
        let b = store.append(result("Adda")).unwrap();
        assert_eq!(store.len(), 2);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn reload_reproduces_sequence() {
        let storage = MemoryStore::new();
        let mut store = HistoryStore::load(storage.clone());
        store.append(result("one")).unwrap();
        store.append(result("two")).unwrap();

        let reloaded = HistoryStore::load(storage);
        assert_eq!(reloaded.list(), store.list());
    }

    #[test]
    fn clear_removes_persisted_value() {
        let storage = MemoryStore::new();
        let mut store = HistoryStore::load(storage.clone());
        store.append(result("one")).unwrap();
        assert!(storage.contains_key(HISTORY_STORAGE_KEY));

        store.clear().unwrap();
        assert!(store.list().is_empty());
        assert!(!storage.contains_key(HISTORY_STORAGE_KEY));
        assert!(HistoryStore::load(storage).is_empty());
    }

    #[test]
    fn corrupt_storage_starts_empty_and_is_discarded() {
        let storage = MemoryStore::new();
        storage.set(HISTORY_STORAGE_KEY, "{not json").unwrap();

        let store = HistoryStore::load(storage.clone());
        assert!(store.is_empty());
        assert!(!storage.contains_key(HISTORY_STORAGE_KEY));
    }

    #[test]
    fn wrong_shape_is_treated_as_corrupt() {
        let storage = MemoryStore::new();
        storage
            .set(HISTORY_STORAGE_KEY, r#"[{"id": "x", "timestamp": 1}]"#)
            .unwrap();
        assert!(HistoryStore::load(storage).is_empty());
    }

    #[test]
    fn oversized_storage_is_truncated_on_load() {
        let storage = MemoryStore::new();
        let items: Vec<HistoryItem> = (0..12)
            .rev()
            .map(|ts| HistoryItem::new(sample_result(), ts))
            .collect();
        storage
            .set(HISTORY_STORAGE_KEY, &serde_json::to_string(&items).unwrap())
            .unwrap();

        let store = HistoryStore::load(storage);
        assert_eq!(store.len(), MAX_HISTORY_ITEMS);
        assert_eq!(store.list()[0].timestamp(), 11);
    }

    #[test]
    fn write_failure_is_reported_but_memory_updated() {
        let mut store = HistoryStore::load(FailingStore);
        let err = store.append(result("one")).unwrap_err();
        assert!(matches!(err, StorageError::WriteFailed { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn timestamps_never_go_backwards() {
        let storage = MemoryStore::new();
        let future = HistoryItem::new(sample_result(), i64::MAX / 2);
        storage
            .set(HISTORY_STORAGE_KEY, &serde_json::to_string(&[future]).unwrap())
            .unwrap();

        let mut store = HistoryStore::load(storage);
        let item = store.append(result("later")).unwrap();
        assert_eq!(item.timestamp(), i64::MAX / 2);
    }
}
