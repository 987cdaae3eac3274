use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;

/// Whether the cart has anything in it.
///
/// Checkout is a single transition back to `Empty`; there are no
/// pending/submitted states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Empty,
    NonEmpty,
}

/// One product-quantity pairing.
///
/// `quantity` is always at least 1. A line that would drop below 1 is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// `price * quantity` at full precision.
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// The user's current, unsubmitted selection.
///
/// Lines keep insertion order for display and product ids are unique.
/// Mutations go through `CartService`, which upholds both rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub(crate) lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from already-ordered lines, checking every invariant.
    pub fn from_lines(lines: Vec<CartLine>) -> Result<Self, String> {
        let cart = Self { lines };
        cart.check_invariants()?;
        Ok(cart)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.line(product_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn state(&self) -> CartState {
        if self.lines.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price * quantity` over all lines. No rounding.
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Verify unique product ids, positive quantities and non-negative prices.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut seen = HashSet::with_capacity(self.lines.len());
        for line in &self.lines {
            if !seen.insert(line.product.id.as_str()) {
                return Err(format!("duplicate cart line for product '{}'", line.product.id));
            }
            if line.quantity < 1 {
                return Err(format!(
                    "cart line for product '{}' has quantity 0",
                    line.product.id
                ));
            }
            if line.product.price < Decimal::ZERO {
                return Err(format!(
                    "product '{}' has negative price {}",
                    line.product.id, line.product.price
                ));
            }
        }
        Ok(())
    }
}
