// ═══════════════════════════════════════════════════════════════════
// Model Tests: Cart, CartLine, ContactInfo, Order, money formatting
// ═══════════════════════════════════════════════════════════════════

use chrono::Utc;
use rust_decimal::Decimal;
use storefront_core::models::cart::{Cart, CartLine, CartState};
use storefront_core::models::courier::Courier;
use storefront_core::models::money::format_currency;
use storefront_core::models::order::{ContactInfo, Order};
use storefront_core::models::product::Product;
use uuid::Uuid;

fn line(id: &str, price: Decimal, qty: u32) -> CartLine {
    CartLine::new(Product::new(id, id.to_uppercase(), price, "img"), qty)
}

// ═══════════════════════════════════════════════════════════════════
// Cart
// ═══════════════════════════════════════════════════════════════════

mod cart {
    use super::*;

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.state(), CartState::Empty);
        assert_eq!(cart.subtotal(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn from_lines_keeps_order() {
        let cart = Cart::from_lines(vec![
            line("b", Decimal::new(1, 0), 1),
            line("a", Decimal::new(2, 0), 1),
        ])
        .unwrap();
        assert_eq!(cart.lines()[0].product.id, "b");
        assert_eq!(cart.lines()[1].product.id, "a");
        assert_eq!(cart.state(), CartState::NonEmpty);
    }

    #[test]
    fn from_lines_rejects_duplicates() {
        let err = Cart::from_lines(vec![
            line("a", Decimal::new(1, 0), 1),
            line("a", Decimal::new(1, 0), 2),
        ])
        .unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn from_lines_rejects_zero_quantity() {
        assert!(Cart::from_lines(vec![line("a", Decimal::new(1, 0), 0)]).is_err());
    }

    #[test]
    fn from_lines_allows_free_products() {
        let cart = Cart::from_lines(vec![line("gift", Decimal::ZERO, 1)]).unwrap();
        assert_eq!(cart.subtotal(), Decimal::ZERO);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn item_count_and_subtotal() {
        let cart = Cart::from_lines(vec![
            line("a", Decimal::new(1999, 2), 3),
            line("b", Decimal::new(5, 0), 2),
        ])
        .unwrap();
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.subtotal(), Decimal::new(6997, 2));
        assert!(cart.contains("a"));
        assert!(!cart.contains("c"));
    }

    #[test]
    fn line_total() {
        let l = line("a", Decimal::new(45, 0), 4);
        assert_eq!(l.line_total(), Decimal::new(180, 0));
    }
}

// ═══════════════════════════════════════════════════════════════════
// ContactInfo
// ═══════════════════════════════════════════════════════════════════

mod contact_info {
    use super::*;

    #[test]
    fn complete_contact_has_no_missing_fields() {
        assert!(ContactInfo::new("123", "addr").missing_fields().is_empty());
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let c = ContactInfo::new("  ", "\t");
        assert_eq!(c.missing_fields(), vec!["phone", "address"]);
    }

    #[test]
    fn trimmed() {
        let c = ContactInfo::new(" 123 ", "\n12 Kingsway ");
        assert_eq!(c.trimmed(), ContactInfo::new("123", "12 Kingsway"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Order / Courier
// ═══════════════════════════════════════════════════════════════════

mod order {
    use super::*;

    fn sample_order() -> Order {
        Order {
            id: Uuid::new_v4(),
            reference: "ORD-1".into(),
            lines: vec![line("a", Decimal::new(10, 0), 2), line("b", Decimal::new(5, 0), 1)],
            courier: Courier::new("c1", "Lesotho Post", "3-6 days", Decimal::new(5, 0)),
            contact: ContactInfo::new("1", "a"),
            subtotal: Decimal::new(25, 0),
            shipping_fee: Decimal::new(5, 0),
            total: Decimal::new(30, 0),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn confirmation_message() {
        assert_eq!(
            sample_order().confirmation_message(),
            "Order ORD-1 placed successfully. Courier: Lesotho Post"
        );
    }

    #[test]
    fn item_count() {
        assert_eq!(sample_order().item_count(), 3);
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(sample_order()).unwrap();
        assert_eq!(json["reference"], "ORD-1");
        assert_eq!(json["courier"]["fee"], "5");
        assert_eq!(json["total"], "30");
    }

    #[test]
    fn courier_display() {
        let c = Courier::new("c2", "FastX Courier", "1-3 days", Decimal::new(12, 0));
        assert_eq!(c.to_string(), "FastX Courier (1-3 days)");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Money formatting
// ═══════════════════════════════════════════════════════════════════

mod money {
    use super::*;

    #[test]
    fn whole_amount_gets_two_places() {
        assert_eq!(format_currency(Decimal::new(120, 0), "USD"), "USD 120.00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_currency(Decimal::new(10005, 3), "USD"), "USD 10.01");
        assert_eq!(format_currency(Decimal::new(10004, 3), "USD"), "USD 10.00");
    }

    #[test]
    fn zero() {
        assert_eq!(format_currency(Decimal::ZERO, "LSL"), "LSL 0.00");
    }
}
