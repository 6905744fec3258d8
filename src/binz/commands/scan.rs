use crate::commands::helpers::run_actions;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{KvBackend, RecordStore};
use crate::view::{Effect, Field, Modal, ViewAction, ViewState};

/// Look a storage up by the id printed on its label and open it.
pub fn run<B: KvBackend>(
    store: &mut RecordStore<B>,
    view: &mut ViewState,
    input: String,
) -> Result<CmdResult> {
    let effects = run_actions(
        store,
        view,
        vec![
            ViewAction::Open(Modal::Scan),
            ViewAction::Edit(Field::ScanInput, input),
            ViewAction::SubmitScan,
        ],
    )?;

    let mut result = CmdResult::default();
    for effect in effects {
        if let Effect::Selected(storage) = effect {
            result.add_message(CmdMessage::success(format!(
                "Found storage {}: {}",
                storage.id, storage.name
            )));
            result = result.with_detail(storage);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BinzError;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn scan_opens_storage() {
        let mut store = RecordStore::with_backend(MemBackend::new());
        let s = store.create("Basement", "").unwrap();
        let mut view = ViewState::default();

        let result = run(&mut store, &mut view, s.id.clone()).unwrap();
        assert_eq!(result.detail.unwrap().id, s.id);
        assert!(!view.modals.scan);
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let mut store = RecordStore::with_backend(MemBackend::new());
        let mut view = ViewState::default();

        let err = run(&mut store, &mut view, "99".into()).unwrap_err();
        assert!(matches!(err, BinzError::StorageNotFound(id) if id == "99"));
        assert_eq!(view, ViewState::default());
    }
}
