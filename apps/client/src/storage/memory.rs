//! In-process token storage.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::AppError;
use crate::storage::TokenStore;

/// In-memory `TokenStore` backed by a `RwLock`ed map.
///
/// The default store for tests and for embedding shells that manage
/// persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), AppError> {
        self.values.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::{TokenStore, TOKEN_KEY};

    use super::MemoryTokenStore;

    #[test]
    fn set_get_clear_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(TOKEN_KEY), None);

        store.set(TOKEN_KEY, "abc.def.ghi").unwrap();
        assert_eq!(store.get(TOKEN_KEY), Some("abc.def.ghi".to_string()));

        store.clear(TOKEN_KEY).unwrap();
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn empty_value_reads_as_absent() {
        let store = MemoryTokenStore::new();
        store.set(TOKEN_KEY, "").unwrap();
        assert_eq!(store.get(TOKEN_KEY), None);
    }
}
