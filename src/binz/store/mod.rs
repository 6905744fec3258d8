//! # Storage Layer
//!
//! This module defines the persistence side of binz. It is split in two:
//!
//! - [`backend::KvBackend`]: the raw key-value service (`get`/`set`/`remove`).
//!   It knows nothing about storages or items.
//! - [`record_store::RecordStore`]: the single owner of the storage collection.
//!   Validation, id generation and the whole-collection write live here.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production file-based backend
//!   - One JSON file per key: `<root>/<key>.json`
//!   - Writes go to a temp file first and are renamed into place
//!
//! - [`mem_backend::MemBackend`]: In-memory backend for testing
//!   - No persistence
//!   - Can simulate write failures and counts writes
//!
//! ## Storage Format
//!
//! For `FsBackend`:
//! ```text
//! ~/.local/share/binz/
//! ├── storages.json          # The whole collection (JSON array of storages)
//! ├── storages.corrupt.json  # Quarantined copy of an unreadable collection, if any
//! ├── storages.seq.json      # Highest id issued, once a delete removed it
//! ├── view.json              # Last view state of the CLI
//! └── config.json            # Configuration
//! ```
//!
//! There is no schema version field. Items are nested inside their storage.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use backend::KvBackend;
pub use record_store::{PersistPolicy, RecordStore, StoreOptions};
