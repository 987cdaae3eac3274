use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::errors::CoreError;
use crate::models::courier::Courier;
use crate::models::product::Product;

use super::traits::CatalogProvider;

/// In-memory catalog with fixed products and couriers.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
    couriers: Vec<Courier>,
}

impl StaticCatalog {
    /// Build a catalog, rejecting duplicate ids and negative prices or fees.
    pub fn new(products: Vec<Product>, couriers: Vec<Courier>) -> Result<Self, CoreError> {
        let mut ids = HashSet::new();
        for p in &products {
            if !ids.insert(p.id.as_str()) {
                return Err(CoreError::InvalidCatalog(format!("duplicate product id '{}'", p.id)));
            }
            if p.price < Decimal::ZERO {
                return Err(CoreError::InvalidCatalog(format!(
                    "product '{}' has negative price {}",
                    p.id, p.price
                )));
            }
        }

        let mut ids = HashSet::new();
        for c in &couriers {
            if !ids.insert(c.id.as_str()) {
                return Err(CoreError::InvalidCatalog(format!("duplicate courier id '{}'", c.id)));
            }
            if c.fee < Decimal::ZERO {
                return Err(CoreError::InvalidCatalog(format!(
                    "courier '{}' has negative fee {}",
                    c.id, c.fee
                )));
            }
        }

        Ok(Self { products, couriers })
    }

    /// The WearLes demo catalog: four clothing items and three couriers.
    pub fn sample() -> Self {
        let products = vec![
            Product::new("p1", "Traditional Basotho Blanket", Decimal::new(120, 0), picsum(1)),
            Product::new("p2", "Women's Summer Dress", Decimal::new(45, 0), picsum(2)),
            Product::new("p3", "Men's Shirt", Decimal::new(35, 0), picsum(3)),
            Product::new("p4", "Kids Hoodie", Decimal::new(30, 0), picsum(4)),
        ];
        let couriers = vec![
            Courier::new("c1", "Lesotho Post", "3-6 days", Decimal::new(5, 0)),
            Courier::new("c2", "FastX Courier", "1-3 days", Decimal::new(12, 0)),
            Courier::new("c3", "CrossBorder Express", "4-8 days", Decimal::new(8, 0)),
        ];
        Self { products, couriers }
    }
}

impl CatalogProvider for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn couriers(&self) -> &[Courier] {
        &self.couriers
    }
}

fn picsum(n: u32) -> String {
    format!("https://picsum.photos/300/200?random={n}")
}
