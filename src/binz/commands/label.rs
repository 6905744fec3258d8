use crate::commands::helpers::run_actions;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::label::render_label;
use crate::store::{KvBackend, RecordStore};
use crate::view::{Effect, Modal, ViewAction, ViewState};

/// Render the label of `storage_id`, or of the open storage when `None`.
///
/// The label modal is closed again afterwards: a printed label is not
/// something to come back to.
pub fn run<B: KvBackend>(
    store: &mut RecordStore<B>,
    view: &mut ViewState,
    storage_id: Option<String>,
) -> Result<CmdResult> {
    let show = match storage_id {
        Some(id) => ViewAction::ShowLabel(id),
        None => ViewAction::Open(Modal::ShowQr),
    };
    let effects = run_actions(store, view, vec![show, ViewAction::Close(Modal::ShowQr)])?;

    let mut result = CmdResult::default();
    for effect in effects {
        if let Effect::LabelShown(storage) = effect {
            result = result.with_label(render_label(&storage));
        }
    }
    Ok(result)
}
