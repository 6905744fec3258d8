use super::backend::KvBackend;
use crate::error::{BinzError, Result};
use crate::ids::{high_water_mark, IdStrategy};
use crate::model::{Item, Storage};

pub const DEFAULT_COLLECTION_KEY: &str = "storages";
/// `<collection key>.corrupt` keeps a copy of collection data that failed to parse.
pub const QUARANTINE_SUFFIX: &str = ".corrupt";
/// `<collection key>.seq` records the highest sequential id ever issued.
pub const COUNTER_SUFFIX: &str = ".seq";

/// What to do when the backend refuses a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistPolicy {
    /// Report `BinzError::Persistence` and keep the previous collection.
    #[default]
    Strict,
    /// Log the failure and keep the change in memory anyway.
    Lenient,
}

#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub collection_key: String,
    pub id_strategy: IdStrategy,
    pub policy: PersistPolicy,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            collection_key: DEFAULT_COLLECTION_KEY.to_string(),
            id_strategy: IdStrategy::default(),
            policy: PersistPolicy::default(),
        }
    }
}

/// Owner of the storage collection.
///
/// Every effective mutation builds the next collection on a copy, writes the
/// whole of it under one key, and only then adopts it. There is never a
/// partial write of the collection.
///
/// Sequential ids never go backwards. The highest id issued is tracked in
/// memory and, when a delete would drop it out of the collection, written to
/// `<key>.seq` just before the collection itself.
pub struct RecordStore<B: KvBackend> {
    backend: B,
    options: StoreOptions,
    storages: Vec<Storage>,
    /// Highest sequential id issued so far.
    issued: u64,
    /// Counter value held by the backend.
    recorded: u64,
    /// Set when the stored collection exists but could not be read or kept
    /// aside. Writes are refused so the data is not replaced.
    unreadable: bool,
}

impl<B: KvBackend> RecordStore<B> {
    /// Build a store and load whatever the backend holds.
    pub fn open(backend: B, options: StoreOptions) -> Self {
        let mut store = Self {
            backend,
            options,
            storages: Vec::new(),
            issued: 0,
            recorded: 0,
            unreadable: false,
        };
        store.load();
        store
    }

    pub fn with_backend(backend: B) -> Self {
        Self::open(backend, StoreOptions::default())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Re-read the collection from the backend.
    ///
    /// Never fails: a missing blob is an empty collection, and unreadable or
    /// malformed data is logged and treated as empty. Malformed data is first
    /// copied to `<key>.corrupt` so the next write does not destroy it. Data
    /// that cannot be read at all (or copied aside) blocks every later write
    /// until a successful `load`.
    pub fn load(&mut self) -> Vec<Storage> {
        let key = self.options.collection_key.clone();
        let mut unreadable = false;

        self.storages = match self.backend.get(&key) {
            Ok(None) => Vec::new(),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Storage>>(&raw) {
                Ok(storages) => storages,
                Err(e) => {
                    log::warn!("Ignoring malformed data under '{}': {}", key, e);
                    let quarantine = format!("{}{}", key, QUARANTINE_SUFFIX);
                    if let Err(e) = self.backend.set(&quarantine, &raw) {
                        log::error!("Could not keep a copy in '{}': {}", quarantine, e);
                        unreadable = true;
                    }
                    Vec::new()
                }
            },
            Err(e) => {
                log::error!("Error loading storages under '{}': {}", key, e);
                unreadable = true;
                Vec::new()
            }
        };
        self.unreadable = unreadable;

        self.recorded = self.read_counter();
        self.issued = self.recorded.max(high_water_mark(&self.storages));
        log::debug!(
            "loaded {} storages, highest id issued {}",
            self.storages.len(),
            self.issued
        );
        self.storages.clone()
    }

    /// Replace the whole collection.
    pub fn save(&mut self, storages: Vec<Storage>) -> Result<()> {
        self.commit(storages)
    }

    pub fn storages(&self) -> &[Storage] {
        &self.storages
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Storage> {
        self.storages.iter().find(|s| s.id == id)
    }

    pub fn create(&mut self, name: &str, location: &str) -> Result<Storage> {
        if name.trim().is_empty() {
            return Err(BinzError::Validation(
                "Please enter storage name".to_string(),
            ));
        }

        let id = self.options.id_strategy.next_id(self.issued);
        let storage = Storage::new(id, name, location);

        let mut next = self.storages.clone();
        next.push(storage.clone());
        self.commit(next)?;

        log::info!("created storage {} ({})", storage.id, storage.name);
        Ok(storage)
    }

    pub fn add_item(
        &mut self,
        storage_id: &str,
        name: &str,
        quantity: &str,
        description: &str,
    ) -> Result<Item> {
        if name.trim().is_empty() {
            return Err(BinzError::Validation("Please enter item name".to_string()));
        }

        let pos = self
            .position(storage_id)
            .ok_or_else(|| BinzError::StorageNotFound(storage_id.to_string()))?;

        let id = self.options.id_strategy.next_id(self.issued);
        let item = Item::new(id, name, quantity, description);

        let mut next = self.storages.clone();
        next[pos].items.push(item.clone());
        self.commit(next)?;

        log::info!("added item {} to storage {}", item.id, storage_id);
        Ok(item)
    }

    /// Remove a storage together with its items.
    /// Returns `Ok(None)` without writing when the id is unknown.
    pub fn delete_storage(&mut self, storage_id: &str) -> Result<Option<Storage>> {
        let Some(pos) = self.position(storage_id) else {
            log::debug!("delete of unknown storage {} ignored", storage_id);
            return Ok(None);
        };

        let mut next = self.storages.clone();
        let removed = next.remove(pos);
        self.record_counter(&next)?;
        self.commit(next)?;

        log::info!(
            "deleted storage {} with {} items",
            removed.id,
            removed.items.len()
        );
        Ok(Some(removed))
    }

    /// Remove one item. Returns `Ok(None)` without writing when either id is unknown.
    pub fn delete_item(&mut self, storage_id: &str, item_id: &str) -> Result<Option<Item>> {
        let Some(pos) = self.position(storage_id) else {
            return Ok(None);
        };
        let Some(item_pos) = self.storages[pos]
            .items
            .iter()
            .position(|i| i.id == item_id)
        else {
            return Ok(None);
        };

        let mut next = self.storages.clone();
        let removed = next[pos].items.remove(item_pos);
        self.record_counter(&next)?;
        self.commit(next)?;

        log::info!("deleted item {} from storage {}", removed.id, storage_id);
        Ok(Some(removed))
    }

    fn position(&self, storage_id: &str) -> Option<usize> {
        self.storages.iter().position(|s| s.id == storage_id)
    }

    fn counter_key(&self) -> String {
        format!("{}{}", self.options.collection_key, COUNTER_SUFFIX)
    }

    fn read_counter(&self) -> u64 {
        let key = self.counter_key();
        match self.backend.get(&key) {
            Ok(None) => 0,
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|e| {
                log::warn!("Ignoring malformed id counter under '{}': {}", key, e);
                0
            }),
            Err(e) => {
                log::warn!("Could not read id counter under '{}': {}", key, e);
                0
            }
        }
    }

    /// Write the counter when `next` no longer holds the highest issued id
    /// and the backend does not know about it yet.
    fn record_counter(&mut self, next: &[Storage]) -> Result<()> {
        if self.options.id_strategy != IdStrategy::Sequential
            || self.unreadable
            || self.recorded >= self.issued
            || high_water_mark(next) >= self.issued
        {
            return Ok(());
        }

        let key = self.counter_key();
        match (
            self.backend.set(&key, &self.issued.to_string()),
            self.options.policy,
        ) {
            (Ok(()), _) => {
                log::debug!("recorded id counter {} under '{}'", self.issued, key);
                self.recorded = self.issued;
                Ok(())
            }
            (Err(e), PersistPolicy::Strict) => {
                log::error!("Error saving id counter: {}", e);
                Err(BinzError::Persistence(e.to_string()))
            }
            (Err(e), PersistPolicy::Lenient) => {
                log::error!("Error saving id counter: {}", e);
                Ok(())
            }
        }
    }

    fn commit(&mut self, next: Vec<Storage>) -> Result<()> {
        let key = &self.options.collection_key;
        let outcome = if self.unreadable {
            Err(BinzError::Store(format!(
                "stored data under '{}' could not be read, refusing to overwrite it",
                key
            )))
        } else {
            serde_json::to_string(&next)
                .map_err(BinzError::Serialization)
                .and_then(|json| self.backend.set(key, &json))
        };

        match (outcome, self.options.policy) {
            (Ok(()), _) => {
                log::debug!("persisted {} storages", next.len());
                self.adopt(next);
                Ok(())
            }
            (Err(e), PersistPolicy::Strict) => {
                log::error!("Error saving storages: {}", e);
                Err(BinzError::Persistence(e.to_string()))
            }
            (Err(e), PersistPolicy::Lenient) => {
                log::error!("Error saving storages: {}", e);
                self.adopt(next);
                Ok(())
            }
        }
    }

    fn adopt(&mut self, next: Vec<Storage>) {
        self.issued = self.issued.max(high_water_mark(&next));
        self.storages = next;
    }
}
