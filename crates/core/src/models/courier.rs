use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A shipping option offered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Courier {
    pub id: String,

    /// Carrier name shown to the user (e.g., "Lesotho Post")
    pub name: String,

    /// Human-readable delivery window (e.g., "3-6 days")
    pub estimate: String,

    /// Flat shipping fee added to the order total
    #[serde(serialize_with = "rust_decimal::serde::str::serialize")]
    pub fee: Decimal,
}

impl Courier {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        estimate: impl Into<String>,
        fee: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            estimate: estimate.into(),
            fee,
        }
    }
}

impl std::fmt::Display for Courier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.estimate)
    }
}
