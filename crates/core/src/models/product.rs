use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An immutable catalog entry.
///
/// Products are owned by the catalog and copied into cart lines, so a saved
/// cart keeps the title, price and image it was added with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog (e.g., "p1")
    pub id: String,

    /// Display title
    pub title: String,

    /// Unit price in the store currency (never negative).
    ///
    /// Saved as a decimal string so no digits are lost; plain JSON numbers
    /// from older blobs still decode.
    #[serde(serialize_with = "rust_decimal::serde::str::serialize")]
    pub price: Decimal,

    /// Image URI
    pub image: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image: image.into(),
        }
    }
}
