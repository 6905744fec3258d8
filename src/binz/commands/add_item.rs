use crate::commands::helpers::run_actions;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{KvBackend, RecordStore};
use crate::view::{Effect, Field, Modal, ViewAction, ViewState};

#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub name: String,
    pub quantity: String,
    pub description: String,
}

/// Put an item into `storage_id`, or into the storage currently open when
/// `storage_id` is `None`. Naming a storage also opens it.
pub fn run<B: KvBackend>(
    store: &mut RecordStore<B>,
    view: &mut ViewState,
    storage_id: Option<String>,
    item: NewItem,
) -> Result<CmdResult> {
    let mut actions = Vec::with_capacity(6);
    if let Some(id) = storage_id {
        actions.push(ViewAction::SelectStorage(id));
    }
    actions.extend([
        ViewAction::Open(Modal::AddItem),
        ViewAction::Edit(Field::ItemName, item.name),
        ViewAction::Edit(Field::ItemQuantity, item.quantity),
        ViewAction::Edit(Field::ItemDescription, item.description),
        ViewAction::SubmitItem,
    ]);

    let effects = run_actions(store, view, actions)?;

    let mut result = CmdResult::default();
    for effect in effects {
        if let Effect::ItemAdded { storage_id, item } = effect {
            let storage = store.find_by_id(&storage_id).cloned();
            let where_to = storage
                .as_ref()
                .map(|s| s.name.as_str())
                .unwrap_or(storage_id.as_str());
            result.add_message(CmdMessage::success(format!(
                "Added {} x {} to {}",
                item.quantity, item.name, where_to
            )));
            result.affected_items.push(item);
            if let Some(storage) = storage {
                result = result.with_detail(storage);
            }
        }
    }
    Ok(result)
}
