pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use config::StoreConfig;
use errors::CoreError;
use models::{
    cart::{Cart, CartLine, CartState},
    courier::Courier,
    money::format_currency,
    order::{ContactInfo, Order, OrderQuote},
    product::Product,
};
use services::{cart_service::CartService, checkout_service::CheckoutService};
use storage::{manager::StorageManager, traits::KeyValueStore};

/// Main entry point for the storefront core library.
///
/// Owns the in-memory cart and keeps it in sync with a single blob in the
/// injected key-value store. Every mutation is applied to a copy, written,
/// and only committed in memory once the write succeeds, so a failed write
/// leaves the cart exactly as it was.
///
/// Mutating methods take `&mut self`: one store instance never has two
/// writes in flight. Two instances sharing a backing store and key are not
/// coordinated; the last write wins.
#[must_use]
pub struct CartStore<S: KeyValueStore> {
    store: S,
    config: StoreConfig,
    cart: Cart,
    cart_service: CartService,
    checkout_service: CheckoutService,
}

impl<S: KeyValueStore> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage_key", &self.config.storage_key)
            .field("lines", &self.cart.len())
            .field("items", &self.cart.item_count())
            .finish()
    }
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store with an empty in-memory cart. Nothing is read until `load()`.
    ///
    /// The config is validated first; an empty storage key or order prefix
    /// is a `CoreError::Config`.
    pub fn new(store: S, config: StoreConfig) -> Result<Self, CoreError> {
        let config = config.validated()?;
        let checkout_service = CheckoutService::new(config.order_prefix.clone());
        Ok(Self {
            store,
            config,
            cart: Cart::new(),
            cart_service: CartService::new(),
            checkout_service,
        })
    }

    /// Create a store and immediately load the saved cart.
    ///
    /// A corrupt or unreadable cart does not prevent construction: the store
    /// starts empty and the read error is handed back alongside it so the
    /// caller can tell the user. Only an invalid config fails outright.
    pub async fn open(store: S, config: StoreConfig) -> Result<(Self, Option<CoreError>), CoreError> {
        let mut cart_store = Self::new(store, config)?;
        let err = cart_store.load().await.err();
        Ok((cart_store, err))
    }

    // ── Persistence ─────────────────────────────────────────────────

    /// Replace the in-memory cart with the saved one.
    ///
    /// A missing blob loads as an empty cart. If the blob cannot be read or
    /// decoded, the in-memory cart is reset to empty for this session and
    /// `CoreError::PersistenceRead` is returned. The saved blob is left
    /// untouched until the next successful mutation overwrites it.
    pub async fn load(&mut self) -> Result<&Cart, CoreError> {
        match StorageManager::load(&self.store, &self.config.storage_key).await {
            Ok(cart) => {
                self.cart = cart;
                Ok(&self.cart)
            }
            Err(e) => {
                warn!(key = %self.config.storage_key, "discarding unreadable cart for this session");
                self.cart = Cart::new();
                Err(match e {
                    CoreError::PersistenceRead(_) => e,
                    other => CoreError::PersistenceRead(other.to_string()),
                })
            }
        }
    }

    /// Write `next` and, only once the write succeeds, make it the current cart.
    async fn commit(&mut self, next: Cart) -> Result<(), CoreError> {
        StorageManager::save(&self.store, &self.config.storage_key, &next).await?;
        self.cart = next;
        Ok(())
    }

    // ── Cart Mutations ──────────────────────────────────────────────

    /// Add `quantity` (at least 1) units of `product`, merging with an
    /// existing line for the same product id. Persists before returning.
    pub async fn add_item(&mut self, product: Product, quantity: u32) -> Result<(), CoreError> {
        let product_id = product.id.clone();
        let mut next = self.cart.clone();
        self.cart_service.add_item(&mut next, product, quantity)?;
        self.commit(next).await?;
        debug!(%product_id, quantity, "added item to cart");
        Ok(())
    }

    /// Set the quantity of an existing line. `new_quantity` must be at least 1.
    ///
    /// Unknown product ids are a successful no-op and nothing is written.
    pub async fn update_quantity(
        &mut self,
        product_id: &str,
        new_quantity: u32,
    ) -> Result<(), CoreError> {
        let mut next = self.cart.clone();
        if !self
            .cart_service
            .update_quantity(&mut next, product_id, new_quantity)?
        {
            debug!(product_id, "update_quantity: product not in cart, ignoring");
            return Ok(());
        }
        self.commit(next).await?;
        debug!(product_id, quantity = new_quantity, "updated cart quantity");
        Ok(())
    }

    /// Remove the line for `product_id`. Absent ids are a no-op.
    pub async fn remove_item(&mut self, product_id: &str) -> Result<(), CoreError> {
        let mut next = self.cart.clone();
        if !self.cart_service.remove_item(&mut next, product_id) {
            return Ok(());
        }
        self.commit(next).await?;
        debug!(product_id, "removed item from cart");
        Ok(())
    }

    /// Empty the cart and delete the saved blob without placing an order.
    pub async fn clear(&mut self) -> Result<(), CoreError> {
        StorageManager::clear(&self.store, &self.config.storage_key).await?;
        self.cart_service.clear(&mut self.cart);
        debug!("cleared cart");
        Ok(())
    }

    // ── Checkout ────────────────────────────────────────────────────

    /// Subtotal, fee and total if the order were placed with `courier`.
    #[must_use]
    pub fn quote(&self, courier: &Courier) -> OrderQuote {
        self.checkout_service.quote(&self.cart, courier)
    }

    /// Place the (mock) order.
    ///
    /// Fails with `EmptyCart` or `MissingContactInfo` without touching
    /// storage. Otherwise the saved cart is removed first and the in-memory
    /// cart cleared only after that succeeds; if removal fails the cart is
    /// kept, no order is returned and the user can retry.
    pub async fn place_order(
        &mut self,
        courier: &Courier,
        contact: &ContactInfo,
    ) -> Result<Order, CoreError> {
        let order = self.checkout_service.build_order(
            &self.cart,
            courier,
            contact,
            chrono::Utc::now(),
        )?;

        StorageManager::clear(&self.store, &self.config.storage_key).await?;
        self.cart_service.clear(&mut self.cart);

        info!(
            order = %order.reference,
            courier = %order.courier.id,
            total = %order.total,
            "order placed"
        );
        Ok(order)
    }

    // ── Queries ─────────────────────────────────────────────────────

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.cart.line(product_id)
    }

    /// Sum of `price * quantity` over all lines, at full precision.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.cart_service.subtotal(&self.cart)
    }

    /// Total number of units in the cart.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> CartState {
        self.cart.state()
    }

    /// Format an amount in the configured currency, e.g. "USD 120.00".
    #[must_use]
    pub fn format_amount(&self, amount: Decimal) -> String {
        format_currency(amount, &self.config.currency_code)
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The backing key-value store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
