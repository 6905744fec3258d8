use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{KvBackend, RecordStore};
use crate::view::{Screen, ViewState};

/// All storages, in creation order.
pub fn list<B: KvBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_storages(store.storages().to_vec()))
}

/// Whatever the current screen shows: the list on `Home`, one storage on `Detail`.
pub fn current<B: KvBackend>(store: &RecordStore<B>, view: &ViewState) -> Result<CmdResult> {
    match &view.screen {
        Screen::Home => list(store),
        Screen::Detail { storage_id } => match store.find_by_id(storage_id) {
            Some(storage) => Ok(CmdResult::default().with_detail(storage.clone())),
            None => list(store),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn lists_in_creation_order() {
        let mut store = RecordStore::with_backend(MemBackend::new());
        store.create("First", "").unwrap();
        store.create("Second", "").unwrap();

        let result = list(&store).unwrap();
        let names: Vec<&str> = result
            .listed_storages
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn current_follows_the_screen() {
        let mut store = RecordStore::with_backend(MemBackend::new());
        let s = store.create("Only", "").unwrap();

        let home = current(&store, &ViewState::default()).unwrap();
        assert_eq!(home.listed_storages.len(), 1);
        assert!(home.detail.is_none());

        let detail_view = ViewState {
            screen: Screen::Detail { storage_id: s.id },
            ..Default::default()
        };
        let detail = current(&store, &detail_view).unwrap();
        assert_eq!(detail.detail.unwrap().name, "Only");
    }
}
