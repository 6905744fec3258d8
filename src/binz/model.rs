use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_QUANTITY: &str = "1";

/// A physical container: a box, a bin, a shelf.
///
/// Field names serialize in camelCase (`createdAt`) so collections written by
/// older clients load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub items: Vec<Item>,
    pub created_at: DateTime<Utc>,
}

impl Storage {
    pub fn new(id: String, name: &str, location: &str) -> Self {
        Self {
            id,
            name: name.trim().to_string(),
            location: location.trim().to_string(),
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    pub fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }
}

/// Something kept inside a [`Storage`]. Items are never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: String,
    #[serde(default)]
    pub description: String,
    pub added_at: DateTime<Utc>,
}

impl Item {
    /// Blank quantities fall back to [`DEFAULT_QUANTITY`].
    pub fn new(id: String, name: &str, quantity: &str, description: &str) -> Self {
        let quantity = match quantity.trim() {
            "" => DEFAULT_QUANTITY.to_string(),
            q => q.to_string(),
        };
        Self {
            id,
            name: name.trim().to_string(),
            quantity,
            description: description.trim().to_string(),
            added_at: Utc::now(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }
}

fn default_quantity() -> String {
    DEFAULT_QUANTITY.to_string()
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
