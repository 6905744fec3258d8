use crate::api::VIEW_KEY;
use crate::error::{BinzError, Result};
use crate::ids::IdStrategy;
use crate::store::backend::validate_key;
use crate::store::record_store::{COUNTER_SUFFIX, DEFAULT_COLLECTION_KEY, QUARANTINE_SUFFIX};
use crate::store::{PersistPolicy, StoreOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
/// Data-directory keys the collection must not share.
const RESERVED_KEYS: &[&str] = &[VIEW_KEY, "config"];

/// Configuration for binz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BinzConfig {
    /// How new storage and item ids are generated
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Report failed writes and roll back (true), or only log them (false)
    #[serde(default = "default_strict")]
    pub strict_persistence: bool,

    /// Key the storage collection is kept under
    #[serde(default = "default_collection_key")]
    pub collection_key: String,
}

fn default_strict() -> bool {
    true
}

fn default_collection_key() -> String {
    DEFAULT_COLLECTION_KEY.to_string()
}

impl Default for BinzConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            strict_persistence: default_strict(),
            collection_key: default_collection_key(),
        }
    }
}

/// Keys accepted by `binz config`.
pub const CONFIG_KEYS: &[&str] = &["id-strategy", "strict-persistence", "collection-key"];

impl BinzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BinzError::Io)?;
        let config: BinzConfig =
            serde_json::from_str(&content).map_err(BinzError::Serialization)?;
        check_collection_key(&config.collection_key)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BinzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BinzError::Serialization)?;
        fs::write(config_path, content).map_err(BinzError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "id-strategy" => Ok(self.id_strategy.to_string()),
            "strict-persistence" => Ok(self.strict_persistence.to_string()),
            "collection-key" => Ok(self.collection_key.clone()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "id-strategy" => {
                self.id_strategy = value.parse().map_err(BinzError::Validation)?;
            }
            "strict-persistence" => {
                self.strict_persistence = parse_bool(value)?;
            }
            "collection-key" => {
                let value = value.trim();
                check_collection_key(value)?;
                self.collection_key = value.to_string();
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            collection_key: self.collection_key.clone(),
            id_strategy: self.id_strategy,
            policy: if self.strict_persistence {
                PersistPolicy::Strict
            } else {
                PersistPolicy::Lenient
            },
        }
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(BinzError::Validation(format!(
            "Expected true or false, got '{}'",
            other
        ))),
    }
}

/// The collection key names a file in the data directory next to the view
/// state, the config and the collection's own side keys.
fn check_collection_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(BinzError::Validation(
            "collection-key cannot be empty".to_string(),
        ));
    }
    validate_key(key).map_err(|_| {
        BinzError::Validation(format!(
            "collection-key '{}' may only use letters, digits, '.', '_' and '-', and may not start with '.'",
            key
        ))
    })?;
    let reserved = RESERVED_KEYS.contains(&key)
        || key.ends_with(QUARANTINE_SUFFIX)
        || key.ends_with(COUNTER_SUFFIX);
    if reserved {
        return Err(BinzError::Validation(format!(
            "collection-key '{}' is reserved",
            key
        )));
    }
    Ok(())
}

fn unknown_key(key: &str) -> BinzError {
    BinzError::Validation(format!(
        "Unknown config key: {} (known: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BinzConfig::default();
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert!(config.strict_persistence);
        assert_eq!(config.collection_key, "storages");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = BinzConfig::load(dir.path()).unwrap();
        assert_eq!(config, BinzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut config = BinzConfig::default();
        config.set("id-strategy", "uuid").unwrap();
        config.set("strict-persistence", "no").unwrap();
        config.save(&nested).unwrap();

        let loaded = BinzConfig::load(&nested).unwrap();
        assert_eq!(loaded.id_strategy, IdStrategy::Uuid);
        assert!(!loaded.strict_persistence);
        assert_eq!(loaded.store_options().policy, PersistPolicy::Lenient);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"id_strategy":"uuid"}"#).unwrap();

        let config = BinzConfig::load(dir.path()).unwrap();
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert!(config.strict_persistence);
        assert_eq!(config.collection_key, "storages");
    }

    #[test]
    fn test_get_and_reject_unknown_keys() {
        let mut config = BinzConfig::default();
        assert_eq!(config.get("id-strategy").unwrap(), "sequential");
        assert!(config.get("colour").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("strict-persistence", "maybe").is_err());
        assert!(config.set("collection-key", "  ").is_err());
    }

    #[test]
    fn test_collection_key_must_not_clash() {
        let mut config = BinzConfig::default();
        for key in [
            "view",
            "config",
            "storages.corrupt",
            "storages.seq",
            ".hidden",
            "../elsewhere",
            "two words",
        ] {
            let err = config.set("collection-key", key).unwrap_err();
            assert!(matches!(err, BinzError::Validation(_)), "{key}");
        }
        assert_eq!(config.collection_key, "storages");

        config.set("collection-key", " workshop-2.bins ").unwrap();
        assert_eq!(config.collection_key, "workshop-2.bins");
    }

    #[test]
    fn test_load_rejects_hand_edited_reserved_key() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"collection_key":"view"}"#,
        )
        .unwrap();
        assert!(BinzConfig::load(dir.path()).is_err());
    }
}
