use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::CoreError;

/// String-valued key-value storage the cart is persisted to.
///
/// Modelled on the mobile async storage APIs: one opaque string per key.
/// The cart only ever touches a single key. Implementations report read
/// failures as `CoreError::PersistenceRead` and write/remove failures as
/// `CoreError::PersistenceWrite`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, or `None` if nothing is stored.
    async fn get_item(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete `key`. Removing a missing key succeeds.
    async fn remove_item(&self, key: &str) -> Result<(), CoreError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    async fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), CoreError> {
        (**self).remove_item(key).await
    }
}
