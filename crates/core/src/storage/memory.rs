use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::errors::CoreError;

use super::traits::KeyValueStore;

const POISONED: &str = "memory store lock poisoned";

/// In-process key-value store.
///
/// Clones share the same underlying map, so a clone handed to a second
/// `CartStore` behaves like the same device storage after a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> Result<usize, CoreError> {
        let items = self
            .items
            .lock()
            .map_err(|_| CoreError::PersistenceRead(POISONED.into()))?;
        Ok(items.len())
    }

    pub fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.len()? == 0)
    }

    /// Raw value under `key`, bypassing the async API (handy for inspection).
    pub fn raw(&self, key: &str) -> Result<Option<String>, CoreError> {
        let items = self
            .items
            .lock()
            .map_err(|_| CoreError::PersistenceRead(POISONED.into()))?;
        Ok(items.get(key).cloned())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        let items = self
            .items
            .lock()
            .map_err(|_| CoreError::PersistenceRead(POISONED.into()))?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| CoreError::PersistenceWrite(POISONED.into()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), CoreError> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| CoreError::PersistenceWrite(POISONED.into()))?;
        items.remove(key);
        Ok(())
    }
}
