use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::cart::Cart;
use crate::models::courier::Courier;
use crate::models::order::{ContactInfo, Order, OrderQuote};

/// Prices a cart against a courier and builds the order snapshot.
///
/// Does not touch storage; `CartStore` decides when the cart is cleared.
pub struct CheckoutService {
    order_prefix: String,
}

impl CheckoutService {
    pub fn new(order_prefix: impl Into<String>) -> Self {
        Self {
            order_prefix: order_prefix.into(),
        }
    }

    /// Subtotal, shipping fee and total for `courier`.
    pub fn quote(&self, cart: &Cart, courier: &Courier) -> OrderQuote {
        let subtotal = cart.subtotal();
        OrderQuote {
            subtotal,
            shipping_fee: courier.fee,
            total: subtotal + courier.fee,
        }
    }

    /// Check the checkout preconditions.
    ///
    /// Rules:
    /// - The cart must have at least one line
    /// - Phone and address must both be non-blank
    pub fn validate(&self, cart: &Cart, contact: &ContactInfo) -> Result<(), CoreError> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let missing = contact.missing_fields();
        if !missing.is_empty() {
            return Err(CoreError::MissingContactInfo(format!(
                "please provide {}",
                missing.join(" and ")
            )));
        }

        Ok(())
    }

    /// Validate and build the order snapshot stamped with `now`.
    pub fn build_order(
        &self,
        cart: &Cart,
        courier: &Courier,
        contact: &ContactInfo,
        now: DateTime<Utc>,
    ) -> Result<Order, CoreError> {
        self.validate(cart, contact)?;

        let quote = self.quote(cart, courier);
        Ok(Order {
            id: Uuid::new_v4(),
            reference: format!("{}-{}", self.order_prefix, now.timestamp_millis()),
            lines: cart.lines().to_vec(),
            courier: courier.clone(),
            contact: contact.trimmed(),
            subtotal: quote.subtotal,
            shipping_fee: quote.shipping_fee,
            total: quote.total,
            created_at: now,
        })
    }
}
