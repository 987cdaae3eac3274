// ═══════════════════════════════════════════════════════════════════
// Config Tests: StoreConfig defaults, JSON loading, validation
// ═══════════════════════════════════════════════════════════════════

use storefront_core::config::{StoreConfig, DEFAULT_STORAGE_KEY};
use storefront_core::errors::CoreError;

#[test]
fn defaults() {
    let config = StoreConfig::default();
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(config.currency_code, "USD");
    assert_eq!(config.order_prefix, "ORD");
}

#[test]
fn partial_json_fills_defaults() {
    let config = StoreConfig::from_json(r#"{ "currencyCode": "lsl" }"#).unwrap();
    assert_eq!(config.currency_code, "LSL");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
}

#[test]
fn full_json() {
    let config = StoreConfig::from_json(
        r#"{ "storageKey": "cart", "currencyCode": "EUR", "orderPrefix": "WL" }"#,
    )
    .unwrap();
    assert_eq!(config.storage_key, "cart");
    assert_eq!(config.currency_code, "EUR");
    assert_eq!(config.order_prefix, "WL");
}

#[test]
fn malformed_json_is_config_error() {
    assert!(matches!(
        StoreConfig::from_json("{"),
        Err(CoreError::Config(_))
    ));
}

#[test]
fn invalid_currency_rejected() {
    for code in ["US", "USDX", "U$D", ""] {
        let json = format!(r#"{{ "currencyCode": "{code}" }}"#);
        assert!(StoreConfig::from_json(&json).is_err(), "{code} should be rejected");
    }
}

#[test]
fn empty_storage_key_rejected() {
    let err = StoreConfig::from_json(r#"{ "storageKey": "  " }"#).unwrap_err();
    assert!(err.to_string().contains("storage key"));
}

#[test]
fn empty_order_prefix_rejected() {
    assert!(StoreConfig::from_json(r#"{ "orderPrefix": "" }"#).is_err());
}

#[test]
fn with_storage_key() {
    let config = StoreConfig::default().with_storage_key("other");
    assert_eq!(config.storage_key, "other");
}

#[test]
fn load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::load(&dir.path().join("store.json")).unwrap();
    assert_eq!(config, StoreConfig::default());
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{ "orderPrefix": "WL" }"#).unwrap();
    let config = StoreConfig::load(&path).unwrap();
    assert_eq!(config.order_prefix, "WL");
}
