//! # Command Layer
//!
//! Each user intent (create a storage, put an item away, scan a label...)
//! lives in its own submodule. A command translates the intent into a
//! sequence of [`ViewAction`](crate::view::ViewAction)s, runs them through the
//! view controller, and reports back a [`CmdResult`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **User interaction**: No prompts; confirmations are the UI's business
//!
//! ## View state
//!
//! Commands receive the current `ViewState` as `&mut`. The whole action
//! sequence runs on a working copy that replaces the caller's state only when
//! every step succeeded (see [`helpers::run_actions`]).
//!
//! ## Testing Strategy
//!
//! Command tests use `MemBackend` and check the returned `CmdResult` and the
//! resulting view state.

use crate::config::BinzConfig;
use crate::label::Label;
use crate::model::{Item, Storage};
use serde::Serialize;

pub mod add_item;
pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod label;
pub mod navigate;
pub mod scan;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Storages created, deleted or otherwise touched.
    pub affected_storages: Vec<Storage>,
    /// Items added or removed.
    pub affected_items: Vec<Item>,
    /// Storages for a home-screen listing.
    pub listed_storages: Vec<Storage>,
    /// The storage to show in full (detail screen).
    pub detail: Option<Storage>,
    pub label: Option<Label>,
    pub config: Option<BinzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_storages(mut self, storages: Vec<Storage>) -> Self {
        self.listed_storages = storages;
        self
    }

    pub fn with_detail(mut self, storage: Storage) -> Self {
        self.detail = Some(storage);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_config(mut self, config: BinzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
