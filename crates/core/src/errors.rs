use thiserror::Error;

/// Unified error type for the entire storefront-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// None of these are fatal: each one leaves the cart in a well-defined
/// state and the caller may retry.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Persistence ─────────────────────────────────────────────────
    #[error("Could not read saved cart: {0}")]
    PersistenceRead(String),

    #[error("Could not save cart: {0}")]
    PersistenceWrite(String),

    // ── Cart ────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ── Checkout ────────────────────────────────────────────────────
    #[error("Cart is empty, add items before checking out")]
    EmptyCart,

    #[error("Missing contact info: {0}")]
    MissingContactInfo(String),

    // ── Catalog / Config ────────────────────────────────────────────
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::PersistenceRead(e.to_string())
    }
}
