use crate::models::courier::Courier;
use crate::models::product::Product;

/// Read-only source of products and couriers.
///
/// The cart never fetches or mutates catalog data; callers look entries up
/// here and hand them to `CartStore`.
pub trait CatalogProvider: Send + Sync {
    /// All products, in display order.
    fn products(&self) -> &[Product];

    /// All shipping options, in display order.
    fn couriers(&self) -> &[Courier];

    fn find_product(&self, id: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    fn find_courier(&self, id: &str) -> Option<&Courier> {
        self.couriers().iter().find(|c| c.id == id)
    }

    /// The courier preselected on the cart screen (the first one listed).
    fn default_courier(&self) -> Option<&Courier> {
        self.couriers().first()
    }
}
