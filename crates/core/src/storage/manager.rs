use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::cart::Cart;

use super::format;
use super::traits::KeyValueStore;

/// High-level storage operations: save/load/clear a cart under one key.
pub struct StorageManager;

impl StorageManager {
    /// Read and decode the cart stored under `key`.
    ///
    /// Flow: store.get_item(key) → JSON → version check → invariant check → Cart
    ///
    /// A missing key is an empty cart, not an error.
    pub async fn load<S>(store: &S, key: &str) -> Result<Cart, CoreError>
    where
        S: KeyValueStore + ?Sized,
    {
        let raw = match store.get_item(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "no saved cart, starting empty");
                return Ok(Cart::new());
            }
            Err(e) => {
                warn!(key, error = %e, "failed to read saved cart");
                return Err(e);
            }
        };

        match format::read_cart(&raw) {
            Ok((version, cart)) => {
                if version != format::CURRENT_VERSION {
                    debug!(key, version, "loaded cart saved in an older format");
                }
                debug!(key, lines = cart.len(), "loaded saved cart");
                Ok(cart)
            }
            Err(e) => {
                warn!(key, error = %e, "saved cart is corrupt");
                Err(e)
            }
        }
    }

    /// Encode and write the cart under `key`.
    ///
    /// Flow: Cart → versioned JSON envelope → store.set_item(key)
    pub async fn save<S>(store: &S, key: &str, cart: &Cart) -> Result<(), CoreError>
    where
        S: KeyValueStore + ?Sized,
    {
        let blob = format::write_cart(cart)?;
        store.set_item(key, &blob).await.map_err(|e| {
            warn!(key, error = %e, "failed to save cart");
            e
        })
    }

    /// Remove whatever is stored under `key`.
    pub async fn clear<S>(store: &S, key: &str) -> Result<(), CoreError>
    where
        S: KeyValueStore + ?Sized,
    {
        store.remove_item(key).await.map_err(|e| {
            warn!(key, error = %e, "failed to clear saved cart");
            e
        })
    }
}
