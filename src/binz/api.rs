//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all binz operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`RecordStore`] and the current [`ViewState`]
//! - **Dispatches** to the appropriate command function
//! - **Keeps the view state** across runs, stored under [`VIEW_KEY`] in the same backend
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and `view.rs`
//! - **I/O operations**: No stdout, stderr, or formatting
//!
//! ## Generic Over KvBackend
//!
//! `BinzApi<B: KvBackend>` is generic over the storage backend:
//! - Production: `BinzApi<FsBackend>`
//! - Testing: `BinzApi<MemBackend>`

use crate::commands;
use crate::config::BinzConfig;
use crate::error::{BinzError, Result};
use crate::store::{KvBackend, RecordStore};
use crate::view::ViewState;
use std::path::PathBuf;

/// Backend key holding the serialized [`ViewState`].
pub const VIEW_KEY: &str = "view";

/// The main API facade for binz operations.
pub struct BinzApi<B: KvBackend> {
    store: RecordStore<B>,
    view: ViewState,
    config_dir: PathBuf,
}

impl<B: KvBackend> BinzApi<B> {
    pub fn new(backend: B, config: &BinzConfig, config_dir: PathBuf) -> Self {
        let store = RecordStore::open(backend, config.store_options());
        let view = load_view(store.backend()).reconcile(&store);
        Self {
            store,
            view,
            config_dir,
        }
    }

    pub fn create_storage(&mut self, name: String, location: String) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.store, &mut self.view, name, location)?;
        self.save_view();
        Ok(result)
    }

    pub fn add_item(&mut self, storage_id: Option<String>, item: NewItem) -> Result<CmdResult> {
        let result = commands::add_item::run(&mut self.store, &mut self.view, storage_id, item)?;
        self.save_view();
        Ok(result)
    }

    pub fn open_storage(&mut self, storage_id: String) -> Result<CmdResult> {
        let result = commands::navigate::open(&mut self.store, &mut self.view, storage_id)?;
        self.save_view();
        Ok(result)
    }

    pub fn back(&mut self) -> Result<CmdResult> {
        let result = commands::navigate::back(&mut self.store, &mut self.view)?;
        self.save_view();
        Ok(result)
    }

    pub fn delete_storage(&mut self, storage_id: String) -> Result<CmdResult> {
        let result = commands::delete::storage(&mut self.store, &mut self.view, storage_id)?;
        self.save_view();
        Ok(result)
    }

    pub fn delete_item(&mut self, storage_id: Option<String>, item_id: String) -> Result<CmdResult> {
        let result = commands::delete::item(&mut self.store, &mut self.view, storage_id, item_id)?;
        self.save_view();
        Ok(result)
    }

    pub fn scan(&mut self, input: String) -> Result<CmdResult> {
        let result = commands::scan::run(&mut self.store, &mut self.view, input)?;
        self.save_view();
        Ok(result)
    }

    pub fn label(&mut self, storage_id: Option<String>) -> Result<CmdResult> {
        let result = commands::label::run(&mut self.store, &mut self.view, storage_id)?;
        self.save_view();
        Ok(result)
    }

    pub fn list_storages(&self) -> Result<CmdResult> {
        commands::get::list(&self.store)
    }

    pub fn current(&self) -> Result<CmdResult> {
        commands::get::current(&self.store, &self.view)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    /// View state is convenience, not data: a failed write is only logged.
    fn save_view(&self) {
        let outcome = serde_json::to_string(&self.view)
            .map_err(BinzError::Serialization)
            .and_then(|json| self.store.backend().set(VIEW_KEY, &json));
        if let Err(e) = outcome {
            log::warn!("Could not save view state: {}", e);
        }
    }
}

fn load_view<B: KvBackend>(backend: &B) -> ViewState {
    match backend.get(VIEW_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable view state: {}", e);
            ViewState::default()
        }),
        Ok(None) => ViewState::default(),
        Err(e) => {
            log::warn!("Could not read view state: {}", e);
            ViewState::default()
        }
    }
}

pub use crate::commands::add_item::NewItem;
pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::view::Screen;

    fn api_with(backend: MemBackend) -> BinzApi<MemBackend> {
        BinzApi::new(backend, &BinzConfig::default(), PathBuf::from("/nonexistent"))
    }

    #[test]
    fn create_dispatches_and_saves_view() {
        let mut api = api_with(MemBackend::new());
        let result = api.create_storage("Garage".into(), "".into()).unwrap();
        assert_eq!(result.affected_storages[0].id, "1");
        assert!(api.store().backend().raw(VIEW_KEY).is_some());
    }

    #[test]
    fn view_state_is_restored() {
        let backend = MemBackend::new();
        let mut api = api_with(backend);
        api.create_storage("Garage".into(), "".into()).unwrap();
        api.open_storage("1".into()).unwrap();

        let collection = api.store().backend().raw("storages").unwrap();
        let view = api.store().backend().raw(VIEW_KEY).unwrap();
        let restored = api_with(
            MemBackend::new()
                .with_value("storages", &collection)
                .with_value(VIEW_KEY, &view),
        );
        assert_eq!(restored.view_state().selected(), Some("1"));
        assert!(restored.current().unwrap().detail.is_some());
    }

    #[test]
    fn stale_view_state_falls_back_to_home() {
        let stale = r#"{"screen":{"name":"detail","storage_id":"42"}}"#;
        let api = api_with(MemBackend::new().with_value(VIEW_KEY, stale));
        assert_eq!(api.view_state().screen, Screen::Home);
    }

    #[test]
    fn garbage_view_state_is_ignored() {
        let api = api_with(MemBackend::new().with_value(VIEW_KEY, "nope"));
        assert_eq!(api.view_state(), &ViewState::default());
    }

    #[test]
    fn failed_command_does_not_touch_saved_view() {
        let mut api = api_with(MemBackend::new());
        assert!(api.scan("7".into()).is_err());
        assert!(api.store().backend().raw(VIEW_KEY).is_none());
    }
}
