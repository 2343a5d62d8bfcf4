//! History command handler

use std::time::{SystemTime, UNIX_EPOCH};

use crate::application::ports::KeyValueStore;
use crate::application::HistoryStore;
use crate::domain::history::HistoryItem;

use super::args::HistoryAction;
use super::presenter::Presenter;

/// Handle history subcommand
pub fn handle_history_command<S: KeyValueStore>(
    action: HistoryAction,
    storage: S,
    presenter: &Presenter,
) -> Result<(), String> {
    let mut store = HistoryStore::load(storage);

    match action {
        HistoryAction::List => {
            if store.is_empty() {
                presenter.info("No history yet");
            } else {
                presenter.history(store.list(), now_ms());
            }
            Ok(())
        }
        HistoryAction::Show { id, json } => {
            let item = find_item(store.list(), &id)?;
            if json {
                let out = serde_json::to_string_pretty(item).map_err(|e| e.to_string())?;
                presenter.output(&out);
            } else {
                presenter.result(item.result());
            }
            Ok(())
        }
        HistoryAction::Clear => {
            let count = store.len();
            store.clear().map_err(|e| e.to_string())?;
            presenter.success(&format!("Cleared {} item(s)", count));
            Ok(())
        }
    }
}

/// Find an item by exact id or unique id prefix
fn find_item<'a>(items: &'a [HistoryItem], id: &str) -> Result<&'a HistoryItem, String> {
    if let Some(item) = items.iter().find(|item| item.id() == id) {
        return Ok(item);
    }

    let mut matches = items.iter().filter(|item| item.id().starts_with(id));
    match (matches.next(), matches.next()) {
        (Some(item), None) if !id.is_empty() => Ok(item),
        (Some(_), Some(_)) => Err(format!("History id '{}' is ambiguous", id)),
        _ => Err(format!("No history item matches '{}'", id)),
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::HISTORY_STORAGE_KEY;
    use crate::domain::translation::sample_result;
    use crate::infrastructure::MemoryStore;

    fn seeded() -> (MemoryStore, Vec<HistoryItem>) {
        let storage = MemoryStore::new();
        let mut store = HistoryStore::load(storage.clone());
        store.append(sample_result()).unwrap();
        store.append(sample_result()).unwrap();
        let items = store.list().to_vec();
        (storage, items)
    }

    #[test]
    fn find_by_exact_id() {
        let (_, items) = seeded();
        let found = find_item(&items, items[1].id()).unwrap();
        assert_eq!(found.id(), items[1].id());
    }

    #[test]
    fn find_by_unique_prefix() {
        let (_, items) = seeded();
        let prefix = &items[0].id()[..13];
        assert_eq!(find_item(&items, prefix).unwrap().id(), items[0].id());
    }

    #[test]
    fn missing_id_is_an_error() {
        let (_, items) = seeded();
        assert!(find_item(&items, "nope").unwrap_err().contains("No history item"));
        assert!(find_item(&items, "").is_err());
    }

    #[test]
    fn show_unknown_id_fails() {
        let (storage, _) = seeded();
        let presenter = Presenter::new();
        let action = HistoryAction::Show {
            id: "nope".to_string(),
            json: false,
        };
        assert!(handle_history_command(action, storage, &presenter).is_err());
    }

    #[test]
    fn clear_removes_stored_history() {
        let (storage, _) = seeded();
        let presenter = Presenter::new();
        handle_history_command(HistoryAction::Clear, storage.clone(), &presenter).unwrap();
        assert!(!storage.contains_key(HISTORY_STORAGE_KEY));
    }

    #[test]
    fn list_on_empty_storage_succeeds() {
        let presenter = Presenter::new();
        assert!(handle_history_command(HistoryAction::List, MemoryStore::new(), &presenter).is_ok());
    }
}
