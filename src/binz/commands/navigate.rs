use crate::commands::helpers::run_actions;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{KvBackend, RecordStore};
use crate::view::{Effect, ViewAction, ViewState};

/// Open a storage's detail screen.
pub fn open<B: KvBackend>(
    store: &mut RecordStore<B>,
    view: &mut ViewState,
    storage_id: String,
) -> Result<CmdResult> {
    let effects = run_actions(store, view, vec![ViewAction::SelectStorage(storage_id)])?;

    let mut result = CmdResult::default();
    for effect in effects {
        if let Effect::Selected(storage) = effect {
            result = result.with_detail(storage);
        }
    }
    Ok(result)
}

/// Leave the detail screen and show the storage list.
pub fn back<B: KvBackend>(store: &mut RecordStore<B>, view: &mut ViewState) -> Result<CmdResult> {
    run_actions(store, view, vec![ViewAction::Back])?;
    Ok(CmdResult::default().with_listed_storages(store.storages().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::view::Screen;

    #[test]
    fn open_then_back() {
        let mut store = RecordStore::with_backend(MemBackend::new());
        let s = store.create("Pantry", "Kitchen").unwrap();
        let mut view = ViewState::default();

        let opened = open(&mut store, &mut view, s.id.clone()).unwrap();
        assert_eq!(opened.detail.unwrap().name, "Pantry");
        assert_eq!(view.selected(), Some(s.id.as_str()));

        let home = back(&mut store, &mut view).unwrap();
        assert_eq!(home.listed_storages.len(), 1);
        assert_eq!(view.screen, Screen::Home);
    }
}
