//! # Binz Architecture
//!
//! Binz keeps track of what is inside your storage containers: boxes, bins,
//! shelves, drawers. Each container gets a short id that goes on a printed
//! label; typing that id back in (`binz scan 3`) opens the container.
//!
//! Like any UI-agnostic library, binz does not care who drives it. The CLI is
//! one client; the same core could sit behind a phone app or a web form.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the record store and the current view state         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + View Controller (view.rs)  │
//! │  - User intents become view actions                         │
//! │  - view::apply is a pure state transition                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: the storage collection, one write per change│
//! │  - KvBackend trait: FsBackend (production), MemBackend      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (diagnostics go through the `log` facade)
//! - **Never** calls `std::process::exit`
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user intent
//! - [`view`]: Screens, modals and form buffers as a value, plus transitions
//! - [`store`]: Key-value backends and the record store
//! - [`model`]: Core data types (`Storage`, `Item`)
//! - [`ids`]: Id generation strategies
//! - [`label`]: Printable text labels
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ids;
pub mod label;
pub mod model;
pub mod store;
pub mod view;
