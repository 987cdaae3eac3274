// ═══════════════════════════════════════════════════════════════════
// Error Tests: CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use storefront_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn persistence_read() {
        let err = CoreError::PersistenceRead("bad blob".into());
        assert_eq!(err.to_string(), "Could not read saved cart: bad blob");
    }

    #[test]
    fn persistence_write() {
        let err = CoreError::PersistenceWrite("disk full".into());
        assert_eq!(err.to_string(), "Could not save cart: disk full");
    }

    #[test]
    fn invalid_argument() {
        let err = CoreError::InvalidArgument("quantity must be at least 1".into());
        assert_eq!(err.to_string(), "Invalid argument: quantity must be at least 1");
    }

    #[test]
    fn empty_cart() {
        assert_eq!(
            CoreError::EmptyCart.to_string(),
            "Cart is empty, add items before checking out"
        );
    }

    #[test]
    fn missing_contact_info() {
        let err = CoreError::MissingContactInfo("please provide phone".into());
        assert_eq!(err.to_string(), "Missing contact info: please provide phone");
    }

    #[test]
    fn invalid_catalog() {
        let err = CoreError::InvalidCatalog("duplicate product id 'p1'".into());
        assert_eq!(err.to_string(), "Invalid catalog: duplicate product id 'p1'");
    }

    #[test]
    fn config() {
        let err = CoreError::Config("storage key must not be empty".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: storage key must not be empty"
        );
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::PersistenceRead(_)));
    }

    #[test]
    fn question_mark_converts() {
        fn parse(s: &str) -> Result<Vec<u32>, CoreError> {
            Ok(serde_json::from_str(s)?)
        }
        assert!(parse("[1,2]").is_ok());
        assert!(matches!(parse("nope"), Err(CoreError::PersistenceRead(_))));
    }

    #[test]
    fn errors_are_debug_and_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CoreError::EmptyCart);
        assert!(format!("{err:?}").contains("EmptyCart"));
    }
}
