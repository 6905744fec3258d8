use crate::error::Result;
use crate::store::{KvBackend, RecordStore};
use crate::view::{self, Effect, ViewAction, ViewState};

/// Run `actions` in order against a copy of `view`.
///
/// `view` is replaced only if every action succeeds; the first error is
/// returned and the caller's state is left as it was. Effects other than
/// `Effect::None` are collected in order.
pub fn run_actions<B: KvBackend>(
    store: &mut RecordStore<B>,
    view: &mut ViewState,
    actions: Vec<ViewAction>,
) -> Result<Vec<Effect>> {
    let mut working = view.clone();
    let mut effects = Vec::new();

    for action in actions {
        log::trace!("view action {:?}", action);
        let transition = view::apply(&working, action, store)?;
        working = transition.state;
        if transition.effect != Effect::None {
            effects.push(transition.effect);
        }
    }

    *view = working;
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::view::{Field, Modal};

    #[test]
    fn failed_sequence_leaves_view_untouched() {
        let mut store = RecordStore::with_backend(MemBackend::new());
        let mut view = ViewState::default();

        let result = run_actions(
            &mut store,
            &mut view,
            vec![
                ViewAction::Open(Modal::AddStorage),
                ViewAction::Edit(Field::StorageLocation, "Loft".into()),
                ViewAction::SubmitStorage,
            ],
        );

        assert!(result.is_err());
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn collects_effects_in_order() {
        let mut store = RecordStore::with_backend(MemBackend::new());
        let mut view = ViewState::default();

        let effects = run_actions(
            &mut store,
            &mut view,
            vec![
                ViewAction::Edit(Field::StorageName, "Loft".into()),
                ViewAction::SubmitStorage,
                ViewAction::SelectStorage("1".into()),
            ],
        )
        .unwrap();

        assert_eq!(effects.len(), 2);
        assert!(matches!(effects[0], Effect::StorageCreated(_)));
        assert!(matches!(effects[1], Effect::Selected(_)));
        assert_eq!(view.selected(), Some("1"));
    }
}
