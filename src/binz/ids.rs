//! Identifier generation for storages and items.
//!
//! Ids are opaque strings. The default [`IdStrategy::Sequential`] hands out
//! short decimal ids (`1`, `2`, ...) that are easy to type at the `scan`
//! prompt and to print on a label. [`IdStrategy::Uuid`] trades that for
//! random v4 UUIDs.
//!
//! Sequential ids come from a counter of the highest id ever issued. The
//! record store keeps that counter: it starts from the [`high_water_mark`] of
//! the loaded collection and never goes down, so a deleted storage's id (and
//! the label printed for it) is never handed to another storage.
//! Non-numeric ids (from the uuid strategy, or from older timestamp-based
//! data) are ignored when computing the high-water mark.

use crate::model::Storage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

impl IdStrategy {
    /// `issued` is the highest sequential id handed out so far.
    pub fn next_id(&self, issued: u64) -> String {
        match self {
            IdStrategy::Sequential => (issued + 1).to_string(),
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Sequential => write!(f, "sequential"),
            IdStrategy::Uuid => write!(f, "uuid"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(IdStrategy::Sequential),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(format!(
                "Unknown id strategy '{}' (expected sequential or uuid)",
                other
            )),
        }
    }
}

/// Highest numeric id held by any storage or item, 0 if there is none.
pub fn high_water_mark(storages: &[Storage]) -> u64 {
    storages
        .iter()
        .flat_map(|s| std::iter::once(&s.id).chain(s.items.iter().map(|i| &i.id)))
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}
