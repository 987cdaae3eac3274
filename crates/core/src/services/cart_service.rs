use rust_decimal::Decimal;

use crate::errors::CoreError;
use crate::models::cart::{Cart, CartLine};
use crate::models::product::Product;

/// Applies add/update/remove to a cart while keeping its invariants:
/// one line per product id, every quantity at least 1, insertion order kept.
///
/// Pure business logic, no I/O. Easy to test.
pub struct CartService;

impl CartService {
    pub fn new() -> Self {
        Self
    }

    /// Add `quantity` units of `product`.
    /// Increments the existing line for the same id, otherwise appends a new line.
    pub fn add_item(
        &self,
        cart: &mut Cart,
        product: Product,
        quantity: u32,
    ) -> Result<(), CoreError> {
        Self::validate_quantity(quantity)?;

        if let Some(line) = cart.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.checked_add(quantity).ok_or_else(|| {
                CoreError::InvalidArgument(format!(
                    "quantity for product '{}' would overflow",
                    product.id
                ))
            })?;
        } else {
            cart.lines.push(CartLine::new(product, quantity));
        }
        Ok(())
    }

    /// Replace the quantity of an existing line.
    ///
    /// Returns `Ok(false)` when no line matches `product_id` (the cart is
    /// left untouched so retries are safe).
    pub fn update_quantity(
        &self,
        cart: &mut Cart,
        product_id: &str,
        new_quantity: u32,
    ) -> Result<bool, CoreError> {
        Self::validate_quantity(new_quantity)?;

        match cart.lines.iter_mut().find(|l| l.product.id == product_id) {
            Some(line) => {
                line.quantity = new_quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the line for `product_id`. Returns whether a line was removed.
    pub fn remove_item(&self, cart: &mut Cart, product_id: &str) -> bool {
        let before = cart.lines.len();
        cart.lines.retain(|l| l.product.id != product_id);
        cart.lines.len() != before
    }

    /// Remove every line. Returns whether anything was removed.
    pub fn clear(&self, cart: &mut Cart) -> bool {
        let had_lines = !cart.lines.is_empty();
        cart.lines.clear();
        had_lines
    }

    pub fn subtotal(&self, cart: &Cart) -> Decimal {
        cart.subtotal()
    }

    fn validate_quantity(quantity: u32) -> Result<(), CoreError> {
        if quantity < 1 {
            return Err(CoreError::InvalidArgument(
                "quantity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}
