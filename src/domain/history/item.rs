//! History item entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::translation::TranslationResult;

/// A persisted, timestamped translation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    id: String,
    timestamp: i64,
    #[serde(flatten)]
    result: TranslationResult,
}

impl HistoryItem {
    /// Wrap a result with a fresh random id
    pub fn new(result: TranslationResult, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp,
            result,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creation time in milliseconds since the Unix epoch
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn result(&self) -> &TranslationResult {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::translation::sample_result;

    #[test]
    fn ids_are_unique() {
        let a = HistoryItem::new(sample_result(), 1);
        let b = HistoryItem::new(sample_result(), 1);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn id_is_a_hyphenated_v4_uuid() {
        let item = HistoryItem::new(sample_result(), 1);
        let id = Uuid::parse_str(item.id()).unwrap();
        assert_eq!(id.get_version_num(), 4);
        assert_eq!(item.id(), id.hyphenated().to_string());
    }

    #[test]
    fn serializes_flat_with_id_and_timestamp() {
        let item = HistoryItem::new(sample_result(), 1_700_000_000_000);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], item.id());
        assert_eq!(value["timestamp"], 1_700_000_000_000i64);
        assert_eq!(value["originalText"], "Ami bhalo achi");
        assert_eq!(value["intensity"], 3);
    }

    #[test]
    fn json_round_trip_preserves_fields() {
        let item = HistoryItem::new(sample_result(), 42);
        let json = serde_json::to_string(&item).unwrap();
        let parsed: HistoryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }
}
