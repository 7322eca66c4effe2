//! Integration tests for the cart and shopper session.

#![allow(clippy::unwrap_used)]

use std::thread;

use shiba_core::{PhoneNumber, PlanId, Price, ProductId};
use shiba_storefront::models::cart_total;
use shiba_storefront::{AppError, CartItem, Store, StoreError, UserPatch};

fn phone() -> PhoneNumber {
    PhoneNumber::parse("9123456780").unwrap()
}

// =============================================================================
// Cart
// =============================================================================

#[test]
fn test_total_of_planned_and_cash_items() {
    let store = Store::new();
    store
        .add_product_to_cart(ProductId::new(3), Some(PlanId::new(7)), None)
        .unwrap();
    store
        .add_product_to_cart(ProductId::new(2), None, None)
        .unwrap();

    // Gaming on 24 months (₹40,800) plus Lite at cash price (₹15,999)
    assert_eq!(store.cart_total(), Price::rupees(56_799));
    assert_eq!(store.cart_total().to_string(), "₹56,799");
}

#[test]
fn test_same_product_twice_is_two_lines() {
    let store = Store::new();
    store
        .add_product_to_cart(ProductId::new(1), None, None)
        .unwrap();
    store
        .add_product_to_cart(ProductId::new(1), None, None)
        .unwrap();

    assert_eq!(store.cart_count(), 2);
    assert_eq!(store.cart_total(), Price::rupees(59_998));
}

#[test]
fn test_unknown_ids_leave_cart_unchanged() {
    let store = Store::new();

    let err = store
        .add_product_to_cart(ProductId::new(42), None, None)
        .unwrap_err();
    assert_eq!(err, StoreError::ProductNotFound(ProductId::new(42)));

    // Plan 4 belongs to Shiba Lite, not Pro Max
    let err = store
        .add_product_to_cart(ProductId::new(1), Some(PlanId::new(4)), None)
        .unwrap_err();
    assert!(AppError::from(err).is_not_found());

    assert_eq!(store.cart_count(), 0);
    assert_eq!(store.cart_total(), Price::ZERO);
}

#[test]
fn test_set_cart_replaces_contents() {
    let store = Store::new();
    store
        .add_product_to_cart(ProductId::new(1), None, Some("  "))
        .unwrap();

    let lite = store.find_product(ProductId::new(2)).unwrap().clone();
    let items = vec![CartItem::new(lite).with_coupon("WELCOME20")];
    store.set_cart(items.clone());

    assert_eq!(store.cart(), items);
    assert_eq!(store.cart_total(), cart_total(&items));
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn test_login_then_logout_keeps_cart() {
    let store = Store::new();
    store
        .add_product_to_cart(ProductId::new(2), Some(PlanId::new(5)), None)
        .unwrap();

    store.login(phone());
    let user = store.user();
    assert!(user.is_logged_in);
    assert_eq!(user.phone, Some(phone()));

    store.logout();
    let user = store.user();
    assert!(!user.is_logged_in);
    assert_eq!(user.phone, None);
    assert_eq!(store.cart_count(), 1);
}

#[test]
fn test_profile_patch_keeps_login() {
    let store = Store::new();
    store.login(phone());
    store.update_user(UserPatch {
        name: Some("Meera".to_string()),
        ..UserPatch::default()
    });

    let user = store.user();
    assert!(user.is_logged_in);
    assert_eq!(user.display_name(), "Meera");
}

// =============================================================================
// Shared Handles
// =============================================================================

#[test]
fn test_clones_share_state_across_threads() {
    let store = Store::new();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..5 {
                    store
                        .add_product_to_cart(ProductId::new(2), None, None)
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.cart_count(), 20);
    assert_eq!(store.cart_total(), Price::rupees(15_999 * 20));
}

#[test]
fn test_cart_serializes_with_string_prices() {
    let store = Store::new();
    store
        .add_product_to_cart(ProductId::new(2), None, Some("SHIBA10"))
        .unwrap();

    let json = serde_json::to_value(store.cart()).unwrap();
    assert_eq!(json[0]["product"]["name"], "Shiba Lite");
    assert_eq!(json[0]["product"]["price"], "15999");
    assert_eq!(json[0]["coupon"], "SHIBA10");
    assert!(json[0]["plan"].is_null());
}
