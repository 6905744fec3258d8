use crate::commands::helpers::run_actions;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{KvBackend, RecordStore};
use crate::view::{Effect, ViewAction, ViewState};

pub fn storage<B: KvBackend>(
    store: &mut RecordStore<B>,
    view: &mut ViewState,
    storage_id: String,
) -> Result<CmdResult> {
    let effects = run_actions(
        store,
        view,
        vec![ViewAction::DeleteStorage(storage_id.clone())],
    )?;

    let mut result = CmdResult::default();
    for effect in effects {
        match effect {
            Effect::StorageDeleted(Some(removed)) => {
                result.add_message(CmdMessage::success(format!(
                    "Storage deleted ({}): {} and {} item(s)",
                    removed.id,
                    removed.name,
                    removed.items.len()
                )));
                result.affected_storages.push(removed);
            }
            Effect::StorageDeleted(None) => {
                result.add_message(CmdMessage::warning(format!(
                    "No storage with id {}, nothing to delete",
                    storage_id
                )));
            }
            _ => {}
        }
    }
    Ok(result)
}

/// Remove an item from `storage_id`, or from the open storage when `None`.
pub fn item<B: KvBackend>(
    store: &mut RecordStore<B>,
    view: &mut ViewState,
    storage_id: Option<String>,
    item_id: String,
) -> Result<CmdResult> {
    let mut actions = Vec::with_capacity(2);
    if let Some(id) = storage_id {
        actions.push(ViewAction::SelectStorage(id));
    }
    actions.push(ViewAction::DeleteItem(item_id.clone()));

    let effects = run_actions(store, view, actions)?;

    let mut result = CmdResult::default();
    for effect in effects {
        match effect {
            Effect::ItemDeleted(Some(removed)) => {
                result.add_message(CmdMessage::success(format!(
                    "Item removed ({}): {}",
                    removed.id, removed.name
                )));
                result.affected_items.push(removed);
            }
            Effect::ItemDeleted(None) => {
                result.add_message(CmdMessage::warning(format!(
                    "No item with id {} here, nothing to remove",
                    item_id
                )));
            }
            _ => {}
        }
    }
    if let Some(storage) = view.selected().and_then(|id| store.find_by_id(id)) {
        result = result.with_detail(storage.clone());
    }
    Ok(result)
}
