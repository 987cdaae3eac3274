use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use crate::models::cart::{Cart, CartLine};
use crate::models::product::Product;

/// Current persisted cart format version.
pub const CURRENT_VERSION: u16 = 1;

/// Version reported for blobs written before the format carried a version
/// tag: a bare JSON array of `{ "product": {...}, "qty": n }`.
pub const LEGACY_VERSION: u16 = 0;

/// Persisted cart envelope.
///
/// Layout:
/// ```text
/// {
///   "version": 1,
///   "lines": [
///     { "product": { "id", "title", "price": "45.5", "image" }, "quantity": 2 }
///   ]
/// }
/// ```
#[derive(Debug, Serialize)]
struct CartEnvelope<'a> {
    version: u16,
    lines: &'a [CartLine],
}

#[derive(Debug, Deserialize)]
struct VersionedCart {
    version: u16,
    lines: Value,
}

#[derive(Debug, Deserialize)]
struct LegacyLine {
    product: Product,
    #[serde(alias = "qty")]
    quantity: u32,
}

/// Serialize a cart into the current envelope.
pub fn write_cart(cart: &Cart) -> Result<String, CoreError> {
    let envelope = CartEnvelope {
        version: CURRENT_VERSION,
        lines: cart.lines(),
    };
    serde_json::to_string(&envelope)
        .map_err(|e| CoreError::PersistenceWrite(format!("Failed to serialize cart: {e}")))
}

/// Parse a persisted cart blob.
///
/// Returns the format version found and the decoded cart. Anything that is
/// not a well-formed cart (bad JSON, unknown version, duplicate product ids,
/// zero quantities, negative prices) is a `CoreError::PersistenceRead`.
pub fn read_cart(data: &str) -> Result<(u16, Cart), CoreError> {
    let value: Value = serde_json::from_str(data)
        .map_err(|e| CoreError::PersistenceRead(format!("Saved cart is not valid JSON: {e}")))?;

    let (version, lines) = match value {
        Value::Array(_) => {
            let legacy: Vec<LegacyLine> = serde_json::from_value(value).map_err(|e| {
                CoreError::PersistenceRead(format!("Malformed legacy cart: {e}"))
            })?;
            let lines = legacy
                .into_iter()
                .map(|l| CartLine::new(l.product, l.quantity))
                .collect();
            (LEGACY_VERSION, lines)
        }
        Value::Object(_) => {
            let versioned: VersionedCart = serde_json::from_value(value).map_err(|e| {
                CoreError::PersistenceRead(format!("Malformed cart envelope: {e}"))
            })?;
            if versioned.version != CURRENT_VERSION {
                return Err(CoreError::PersistenceRead(format!(
                    "Unsupported cart format version {}",
                    versioned.version
                )));
            }
            let lines: Vec<CartLine> = serde_json::from_value(versioned.lines).map_err(|e| {
                CoreError::PersistenceRead(format!("Malformed cart lines: {e}"))
            })?;
            (versioned.version, lines)
        }
        other => {
            return Err(CoreError::PersistenceRead(format!(
                "Expected a cart object, found {}",
                json_kind(&other)
            )));
        }
    };

    let cart = Cart::from_lines(lines).map_err(CoreError::PersistenceRead)?;
    Ok((version, cart))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
