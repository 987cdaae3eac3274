use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart::CartLine;
use super::courier::Courier;

/// Delivery contact collected on the cart screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub address: String,
}

impl ContactInfo {
    pub fn new(phone: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            address: address.into(),
        }
    }

    /// Names of the fields that are blank after trimming.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        missing
    }

    /// Copy with surrounding whitespace removed from both fields.
    pub fn trimmed(&self) -> Self {
        Self {
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }
}

/// Checkout preview for a chosen courier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuote {
    pub subtotal: Decimal,
    pub shipping_fee: Decimal,
    pub total: Decimal,
}

/// Immutable snapshot produced at checkout.
///
/// Orders are returned to the caller for display and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier
    pub id: Uuid,

    /// Short human-facing reference, e.g. "ORD-1718000000000"
    pub reference: String,

    /// Cart lines at the moment of checkout
    pub lines: Vec<CartLine>,

    pub courier: Courier,

    pub contact: ContactInfo,

    pub subtotal: Decimal,

    pub shipping_fee: Decimal,

    /// `subtotal + shipping_fee`
    pub total: Decimal,

    pub created_at: DateTime<Utc>,
}

impl Order {
    /// The message shown to the user once the order is placed.
    pub fn confirmation_message(&self) -> String {
        format!(
            "Order {} placed successfully. Courier: {}",
            self.reference, self.courier.name
        )
    }

    /// Total number of units in the order.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}
