//! Store configuration.
//!
//! Read from a JSON settings file of the form:
//! ```json
//! { "storageKey": "@wearles_cart_v1", "currencyCode": "USD", "orderPrefix": "ORD" }
//! ```
//! Every field is optional; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Key the cart blob has always been saved under.
pub const DEFAULT_STORAGE_KEY: &str = "@wearles_cart_v1";

pub const DEFAULT_CURRENCY_CODE: &str = "USD";

pub const DEFAULT_ORDER_PREFIX: &str = "ORD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Key-value store key holding the serialized cart.
    pub storage_key: String,

    /// ISO 4217 code used when formatting amounts (e.g., "USD", "LSL").
    pub currency_code: String,

    /// Prefix for human-facing order references.
    pub order_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            order_prefix: DEFAULT_ORDER_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    /// Parse and validate a JSON settings document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: StoreConfig = serde_json::from_str(json)
            .map_err(|e| CoreError::Config(format!("Failed to parse store settings: {e}")))?;
        config.validated()
    }

    /// Load settings from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Use a different storage key (e.g., one cart per test or per profile).
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Normalize the currency code and check every field.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::Config("storage key must not be empty".into()));
        }

        let code = self.currency_code.trim().to_uppercase();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::Config(format!(
                "Invalid currency code '{}': must be exactly 3 ASCII letters (e.g., USD, EUR, LSL)",
                self.currency_code
            )));
        }
        self.currency_code = code;

        if self.order_prefix.trim().is_empty() {
            return Err(CoreError::Config("order prefix must not be empty".into()));
        }

        Ok(self)
    }
}
