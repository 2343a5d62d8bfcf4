//! History domain module

mod item;
mod log;

pub use item::HistoryItem;
pub use log::{HistoryLog, MAX_HISTORY_ITEMS};
