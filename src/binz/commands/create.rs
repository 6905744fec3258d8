use crate::commands::helpers::run_actions;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{KvBackend, RecordStore};
use crate::view::{Effect, Field, Modal, ViewAction, ViewState};

pub fn run<B: KvBackend>(
    store: &mut RecordStore<B>,
    view: &mut ViewState,
    name: String,
    location: String,
) -> Result<CmdResult> {
    let effects = run_actions(
        store,
        view,
        vec![
            ViewAction::Open(Modal::AddStorage),
            ViewAction::Edit(Field::StorageName, name),
            ViewAction::Edit(Field::StorageLocation, location),
            ViewAction::SubmitStorage,
        ],
    )?;

    let mut result = CmdResult::default();
    for effect in effects {
        if let Effect::StorageCreated(storage) = effect {
            result.add_message(CmdMessage::success(format!(
                "Storage created: {} ({})",
                storage.name, storage.id
            )));
            result.add_message(CmdMessage::info(format!(
                "Print a label for it with `binz label {}`",
                storage.id
            )));
            result.affected_storages.push(storage);
        }
    }
    Ok(result)
}
