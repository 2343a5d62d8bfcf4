//! Bounded newest-first history log

use super::item::HistoryItem;

/// Maximum number of items retained
pub const MAX_HISTORY_ITEMS: usize = 10;

/// Ordered sequence of history items, newest first, never longer than
/// [`MAX_HISTORY_ITEMS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    items: Vec<HistoryItem>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from stored items, keeping at most the newest
    /// [`MAX_HISTORY_ITEMS`].
    pub fn from_items(mut items: Vec<HistoryItem>) -> Self {
        items.truncate(MAX_HISTORY_ITEMS);
        Self { items }
    }

    /// Prepend an item, evicting the oldest entries beyond capacity.
    /// Returns the evicted items.
    pub fn push_front(&mut self, item: HistoryItem) -> Vec<HistoryItem> {
        self.items.insert(0, item);
        if self.items.len() > MAX_HISTORY_ITEMS {
            self.items.split_off(MAX_HISTORY_ITEMS)
        } else {
            Vec::new()
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn newest(&self) -> Option<&HistoryItem> {
        self.items.first()
    }

    pub fn get(&self, id: &str) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
