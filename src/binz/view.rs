//! # View Controller
//!
//! The transient UI state of binz as a plain value: which screen is shown,
//! which modals are open, and what has been typed into each form. Nothing in
//! here renders anything.
//!
//! State only changes through [`apply`], which takes the current
//! [`ViewState`] by reference and returns a new one. On error the caller keeps
//! the state it already had, so a rejected form keeps its input for
//! correction.
//!
//! ## Screens
//!
//! ```text
//!            SelectStorage(id) / SubmitScan
//!   ┌──────┐ ─────────────────────────────▶ ┌────────────────┐
//!   │ Home │                                │ Detail { id }  │
//!   └──────┘ ◀───────────────────────────── └────────────────┘
//!             Back / DeleteStorage(id)
//! ```
//!
//! `Detail` carries the selected storage id, so a detail screen without a
//! selection cannot be represented. Modals are flags layered on top of either
//! screen; opening or closing one never navigates. The add-item modal is the
//! exception that needs `Detail`, and leaving `Detail` closes it.

use crate::error::{BinzError, Result};
use crate::model::{Item, Storage};
use crate::store::{KvBackend, RecordStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Detail { storage_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modal {
    AddStorage,
    AddItem,
    ShowQr,
    Scan,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modals {
    pub add_storage: bool,
    pub add_item: bool,
    pub show_qr: bool,
    pub scan: bool,
    /// Storage whose label the QR modal shows.
    #[serde(default)]
    pub label_for: Option<String>,
}

impl Modals {
    pub fn is_open(&self, modal: Modal) -> bool {
        match modal {
            Modal::AddStorage => self.add_storage,
            Modal::AddItem => self.add_item,
            Modal::ShowQr => self.show_qr,
            Modal::Scan => self.scan,
        }
    }

    fn set(&mut self, modal: Modal, open: bool) {
        match modal {
            Modal::AddStorage => self.add_storage = open,
            Modal::AddItem => self.add_item = open,
            Modal::ShowQr => {
                self.show_qr = open;
                if !open {
                    self.label_for = None;
                }
            }
            Modal::Scan => self.scan = open,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StorageForm {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemForm {
    pub name: String,
    pub quantity: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StorageName,
    StorageLocation,
    ItemName,
    ItemQuantity,
    ItemDescription,
    ScanInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub screen: Screen,
    #[serde(default)]
    pub modals: Modals,
    #[serde(default)]
    pub storage_form: StorageForm,
    #[serde(default)]
    pub item_form: ItemForm,
    #[serde(default)]
    pub scan_input: String,
}

impl ViewState {
    pub fn selected(&self) -> Option<&str> {
        match &self.screen {
            Screen::Home => None,
            Screen::Detail { storage_id } => Some(storage_id),
        }
    }

    /// Drop references to storages that no longer exist. A state restored
    /// from disk may point at a storage deleted since.
    pub fn reconcile<B: KvBackend>(mut self, store: &RecordStore<B>) -> Self {
        let missing = |id: Option<&str>| id.is_some_and(|id| store.find_by_id(id).is_none());

        if missing(self.selected()) {
            log::debug!("selected storage is gone, back to home");
            self.go_home();
        }
        if missing(self.modals.label_for.as_deref()) {
            self.modals.set(Modal::ShowQr, false);
        }
        self
    }

    fn go_home(&mut self) {
        self.screen = Screen::Home;
        self.modals.set(Modal::AddItem, false);
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::StorageName => &mut self.storage_form.name,
            Field::StorageLocation => &mut self.storage_form.location,
            Field::ItemName => &mut self.item_form.name,
            Field::ItemQuantity => &mut self.item_form.quantity,
            Field::ItemDescription => &mut self.item_form.description,
            Field::ScanInput => &mut self.scan_input,
        }
    }

    fn require_selection(&self, what: &str) -> Result<String> {
        self.selected()
            .map(str::to_string)
            .ok_or_else(|| BinzError::InvalidTransition(format!("Open a storage to {}", what)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SelectStorage(String),
    Back,
    Open(Modal),
    Close(Modal),
    ShowLabel(String),
    Edit(Field, String),
    SubmitStorage,
    SubmitItem,
    DeleteStorage(String),
    DeleteItem(String),
    SubmitScan,
}

/// What a transition did to the records, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Selected(Storage),
    LabelShown(Storage),
    StorageCreated(Storage),
    ItemAdded { storage_id: String, item: Item },
    StorageDeleted(Option<Storage>),
    ItemDeleted(Option<Item>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ViewState,
    pub effect: Effect,
}

pub fn apply<B: KvBackend>(
    state: &ViewState,
    action: ViewAction,
    store: &mut RecordStore<B>,
) -> Result<Transition> {
    let mut next = state.clone();

    let effect = match action {
        ViewAction::SelectStorage(id) => {
            let storage = lookup(store, &id)?;
            next.screen = Screen::Detail { storage_id: id };
            Effect::Selected(storage)
        }
        ViewAction::Back => {
            next.go_home();
            Effect::None
        }
        ViewAction::Open(Modal::AddItem) => {
            next.require_selection("add items")?;
            next.modals.set(Modal::AddItem, true);
            Effect::None
        }
        ViewAction::Open(Modal::ShowQr) => {
            let id = next.require_selection("show its label")?;
            let storage = lookup(store, &id)?;
            next.modals.set(Modal::ShowQr, true);
            next.modals.label_for = Some(id);
            Effect::LabelShown(storage)
        }
        ViewAction::Open(modal) => {
            next.modals.set(modal, true);
            Effect::None
        }
        ViewAction::Close(modal) => {
            next.modals.set(modal, false);
            Effect::None
        }
        ViewAction::ShowLabel(id) => {
            let storage = lookup(store, &id)?;
            next.modals.set(Modal::ShowQr, true);
            next.modals.label_for = Some(id);
            Effect::LabelShown(storage)
        }
        ViewAction::Edit(field, value) => {
            *next.field_mut(field) = value;
            Effect::None
        }
        ViewAction::SubmitStorage => {
            let form = &next.storage_form;
            let storage = store.create(&form.name, &form.location)?;
            next.storage_form = StorageForm::default();
            next.modals.set(Modal::AddStorage, false);
            Effect::StorageCreated(storage)
        }
        ViewAction::SubmitItem => {
            let storage_id = next.require_selection("add items")?;
            let form = &next.item_form;
            let item = store.add_item(&storage_id, &form.name, &form.quantity, &form.description)?;
            next.item_form = ItemForm::default();
            next.modals.set(Modal::AddItem, false);
            Effect::ItemAdded { storage_id, item }
        }
        ViewAction::DeleteStorage(id) => {
            let removed = store.delete_storage(&id)?;
            if next.selected() == Some(id.as_str()) {
                next.go_home();
            }
            if next.modals.label_for.as_deref() == Some(id.as_str()) {
                next.modals.set(Modal::ShowQr, false);
            }
            Effect::StorageDeleted(removed)
        }
        ViewAction::DeleteItem(item_id) => {
            let storage_id = next.require_selection("remove items")?;
            Effect::ItemDeleted(store.delete_item(&storage_id, &item_id)?)
        }
        ViewAction::SubmitScan => {
            let input = next.scan_input.trim().to_string();
            if input.is_empty() {
                return Err(BinzError::Validation("Please enter storage ID".to_string()));
            }
            let storage = lookup(store, &input)?;
            next.screen = Screen::Detail { storage_id: input };
            next.modals.set(Modal::Scan, false);
            next.scan_input.clear();
            Effect::Selected(storage)
        }
    };

    Ok(Transition {
        state: next,
        effect,
    })
}

fn lookup<B: KvBackend>(store: &RecordStore<B>, id: &str) -> Result<Storage> {
    store
        .find_by_id(id)
        .cloned()
        .ok_or_else(|| BinzError::StorageNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn setup() -> (ViewState, RecordStore<MemBackend>) {
        (
            ViewState::default(),
            RecordStore::with_backend(MemBackend::new()),
        )
    }

    fn step(
        state: &ViewState,
        action: ViewAction,
        store: &mut RecordStore<MemBackend>,
    ) -> ViewState {
        apply(state, action, store).unwrap().state
    }

    #[test]
    fn add_storage_flow_clears_form_and_closes_modal() {
        let (state, mut store) = setup();
        let state = step(&state, ViewAction::Open(Modal::AddStorage), &mut store);
        assert!(state.modals.add_storage);
        assert_eq!(state.screen, Screen::Home);

        let state = step(
            &state,
            ViewAction::Edit(Field::StorageName, "Garage".into()),
            &mut store,
        );
        let state = step(
            &state,
            ViewAction::Edit(Field::StorageLocation, "Back wall".into()),
            &mut store,
        );
        let t = apply(&state, ViewAction::SubmitStorage, &mut store).unwrap();

        assert!(matches!(t.effect, Effect::StorageCreated(ref s) if s.name == "Garage"));
        assert!(!t.state.modals.add_storage);
        assert_eq!(t.state.storage_form, StorageForm::default());
        assert_eq!(store.storages().len(), 1);
    }

    #[test]
    fn rejected_storage_keeps_input() {
        let (state, mut store) = setup();
        let state = step(&state, ViewAction::Open(Modal::AddStorage), &mut store);
        let state = step(
            &state,
            ViewAction::Edit(Field::StorageLocation, "Basement".into()),
            &mut store,
        );

        let err = apply(&state, ViewAction::SubmitStorage, &mut store).unwrap_err();
        assert!(matches!(err, BinzError::Validation(_)));
        assert_eq!(state.storage_form.location, "Basement");
        assert!(state.modals.add_storage);
        assert!(store.storages().is_empty());
    }

    #[test]
    fn select_and_back() {
        let (state, mut store) = setup();
        let s = store.create("Shelf", "").unwrap();

        let detail = step(&state, ViewAction::SelectStorage(s.id.clone()), &mut store);
        assert_eq!(detail.selected(), Some(s.id.as_str()));

        let home = step(&detail, ViewAction::Back, &mut store);
        assert_eq!(home.screen, Screen::Home);
    }

    #[test]
    fn selecting_unknown_storage_fails() {
        let (state, mut store) = setup();
        let err = apply(&state, ViewAction::SelectStorage("9".into()), &mut store).unwrap_err();
        assert!(matches!(err, BinzError::StorageNotFound(_)));
    }

    #[test]
    fn modals_do_not_navigate() {
        let (state, mut store) = setup();
        let s = store.create("Shelf", "").unwrap();
        let detail = step(&state, ViewAction::SelectStorage(s.id), &mut store);

        let with_scan = step(&detail, ViewAction::Open(Modal::Scan), &mut store);
        assert_eq!(with_scan.screen, detail.screen);
        let closed = step(&with_scan, ViewAction::Close(Modal::Scan), &mut store);
        assert_eq!(closed.screen, detail.screen);
        assert!(!closed.modals.scan);
    }

    #[test]
    fn add_item_requires_detail() {
        let (state, mut store) = setup();
        let err = apply(&state, ViewAction::Open(Modal::AddItem), &mut store).unwrap_err();
        assert!(matches!(err, BinzError::InvalidTransition(_)));
        let err = apply(&state, ViewAction::SubmitItem, &mut store).unwrap_err();
        assert!(matches!(err, BinzError::InvalidTransition(_)));
    }

    #[test]
    fn add_item_flow() {
        let (state, mut store) = setup();
        let s = store.create("Toolbox", "").unwrap();
        let state = step(&state, ViewAction::SelectStorage(s.id.clone()), &mut store);
        let state = step(&state, ViewAction::Open(Modal::AddItem), &mut store);
        let state = step(
            &state,
            ViewAction::Edit(Field::ItemName, "Wrench".into()),
            &mut store,
        );

        let t = apply(&state, ViewAction::SubmitItem, &mut store).unwrap();
        match t.effect {
            Effect::ItemAdded { storage_id, item } => {
                assert_eq!(storage_id, s.id);
                assert_eq!(item.quantity, "1");
            }
            other => panic!("unexpected effect {:?}", other),
        }
        assert!(!t.state.modals.add_item);
        assert_eq!(t.state.item_form, ItemForm::default());
    }

    #[test]
    fn deleting_selected_storage_returns_home() {
        let (state, mut store) = setup();
        let s = store.create("Crate", "").unwrap();
        let state = step(&state, ViewAction::SelectStorage(s.id.clone()), &mut store);
        let state = step(&state, ViewAction::Open(Modal::AddItem), &mut store);

        let t = apply(&state, ViewAction::DeleteStorage(s.id.clone()), &mut store).unwrap();
        assert_eq!(t.state.screen, Screen::Home);
        assert!(!t.state.modals.add_item);
        assert!(matches!(t.effect, Effect::StorageDeleted(Some(_))));

        let again = apply(&t.state, ViewAction::DeleteStorage(s.id), &mut store).unwrap();
        assert_eq!(again.effect, Effect::StorageDeleted(None));
    }

    #[test]
    fn deleting_other_storage_keeps_selection() {
        let (state, mut store) = setup();
        let a = store.create("A", "").unwrap();
        let b = store.create("B", "").unwrap();
        let state = step(&state, ViewAction::SelectStorage(a.id.clone()), &mut store);

        let state = step(&state, ViewAction::DeleteStorage(b.id), &mut store);
        assert_eq!(state.selected(), Some(a.id.as_str()));
    }

    #[test]
    fn delete_item_on_selected_storage() {
        let (state, mut store) = setup();
        let s = store.create("Bin", "").unwrap();
        let item = store.add_item(&s.id, "Cable", "", "").unwrap();
        let state = step(&state, ViewAction::SelectStorage(s.id.clone()), &mut store);

        let t = apply(&state, ViewAction::DeleteItem(item.id.clone()), &mut store).unwrap();
        assert_eq!(t.effect, Effect::ItemDeleted(Some(item)));
        assert!(store.find_by_id(&s.id).unwrap().items.is_empty());
    }

    #[test]
    fn scan_selects_matching_storage() {
        let (state, mut store) = setup();
        let s = store.create("Attic", "").unwrap();
        let state = step(&state, ViewAction::Open(Modal::Scan), &mut store);
        let state = step(
            &state,
            ViewAction::Edit(Field::ScanInput, format!(" {} ", s.id)),
            &mut store,
        );

        let t = apply(&state, ViewAction::SubmitScan, &mut store).unwrap();
        assert_eq!(t.state.selected(), Some(s.id.as_str()));
        assert!(!t.state.modals.scan);
        assert!(t.state.scan_input.is_empty());
    }

    #[test]
    fn scan_with_unknown_id_stays_put() {
        let (state, mut store) = setup();
        store.create("Attic", "").unwrap();
        let state = step(&state, ViewAction::Open(Modal::Scan), &mut store);
        let state = step(
            &state,
            ViewAction::Edit(Field::ScanInput, "99".into()),
            &mut store,
        );

        let err = apply(&state, ViewAction::SubmitScan, &mut store).unwrap_err();
        assert!(matches!(err, BinzError::StorageNotFound(_)));
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.scan_input, "99");
    }

    #[test]
    fn scan_with_blank_input_is_a_validation_error() {
        let (state, mut store) = setup();
        let err = apply(&state, ViewAction::SubmitScan, &mut store).unwrap_err();
        assert!(matches!(err, BinzError::Validation(msg) if msg == "Please enter storage ID"));
    }

    #[test]
    fn label_modal_tracks_target() {
        let (state, mut store) = setup();
        let s = store.create("Box", "").unwrap();

        let shown = step(&state, ViewAction::ShowLabel(s.id.clone()), &mut store);
        assert!(shown.modals.show_qr);
        assert_eq!(shown.modals.label_for.as_deref(), Some(s.id.as_str()));
        assert_eq!(shown.screen, Screen::Home);

        let closed = step(&shown, ViewAction::Close(Modal::ShowQr), &mut store);
        assert_eq!(closed.modals.label_for, None);

        let err = apply(&state, ViewAction::Open(Modal::ShowQr), &mut store).unwrap_err();
        assert!(matches!(err, BinzError::InvalidTransition(_)));
    }

    #[test]
    fn reconcile_drops_missing_selection() {
        let (_, mut store) = setup();
        let stale = ViewState {
            screen: Screen::Detail {
                storage_id: "5".into(),
            },
            modals: Modals {
                show_qr: true,
                label_for: Some("5".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let fixed = stale.reconcile(&store);
        assert_eq!(fixed.screen, Screen::Home);
        assert!(!fixed.modals.show_qr);

        let s = store.create("Real", "").unwrap();
        let live = ViewState {
            screen: Screen::Detail {
                storage_id: s.id.clone(),
            },
            ..Default::default()
        };
        assert_eq!(live.clone().reconcile(&store), live);
    }

    #[test]
    fn view_state_round_trips_through_json() {
        let state = ViewState {
            screen: Screen::Detail {
                storage_id: "3".into(),
            },
            scan_input: "12".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains(r#""screen":{"name":"detail","storage_id":"3"}"#));
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
