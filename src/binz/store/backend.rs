use crate::error::{BinzError, Result};

/// Abstract interface for raw key-value I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (validation, ids, whole-collection writes).
///
/// Methods take `&self`; implementations handle their own interior mutability
/// (binz is single-threaded).
pub trait KvBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic: a reader sees the old value or the new one, never a mix.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Keys are restricted to `[A-Za-z0-9._-]` and may not start with `.`, so a
/// key can always be used as a file name without escaping its directory.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(BinzError::Store(format!("Invalid key: {:?}", key)))
    }
}
