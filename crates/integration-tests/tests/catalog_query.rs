//! Integration tests for catalog filtering and sorting.

#![allow(clippy::unwrap_used)]

use shiba_core::{Category, CategoryFilter, ProductId, SortKey};
use shiba_integration_tests::product;
use shiba_storefront::catalog::{self, CatalogCriteria, EmptyReason};
use shiba_storefront::{Product, Store};

fn names(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

fn seed_query(criteria: &CatalogCriteria) -> Vec<String> {
    let products = catalog::seed_products();
    names(catalog::query(&products, criteria).products())
}

// =============================================================================
// Seed Catalog Scenarios
// =============================================================================

#[test]
fn test_budget_category_only_lite() {
    let criteria = CatalogCriteria::default().with_category(Category::Budget);
    assert_eq!(seed_query(&criteria), vec!["Shiba Lite"]);
}

#[test]
fn test_price_ascending_on_all() {
    let criteria = CatalogCriteria::default().with_sort(SortKey::PriceAsc);
    assert_eq!(
        seed_query(&criteria),
        vec!["Shiba Lite", "Shiba Pro Max", "Shiba Gaming"]
    );
}

#[test]
fn test_rating_descending_on_all() {
    let criteria = CatalogCriteria::default().with_sort(SortKey::RatingDesc);
    assert_eq!(
        seed_query(&criteria),
        vec!["Shiba Gaming", "Shiba Pro Max", "Shiba Lite"]
    );
}

#[test]
fn test_default_criteria_sorts_by_name() {
    assert_eq!(
        seed_query(&CatalogCriteria::default()),
        vec!["Shiba Gaming", "Shiba Lite", "Shiba Pro Max"]
    );
}

#[test]
fn test_search_matches_description_case_insensitively() {
    let criteria = CatalogCriteria::default().with_search("GAMING Smartphone");
    assert_eq!(seed_query(&criteria), vec!["Shiba Gaming"]);
}

#[test]
fn test_unique_name_search_returns_that_product() {
    for product in catalog::seed_products() {
        let criteria = CatalogCriteria::default().with_search(product.name.clone());
        assert_eq!(seed_query(&criteria), vec![product.name.clone()]);
    }
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_query_is_pure() {
    let products = catalog::seed_products();
    let criteria = CatalogCriteria::default()
        .with_search("shiba")
        .with_sort(SortKey::PriceDesc);

    let first = catalog::query(&products, &criteria);
    let second = catalog::query(&products, &criteria);
    assert_eq!(first, second);
    assert_eq!(products, catalog::seed_products());
}

#[test]
fn test_category_filter_holds_for_every_result() {
    let products = catalog::seed_products();
    for category in Category::ALL {
        let criteria = CatalogCriteria::default().with_category(category);
        let view = catalog::query(&products, &criteria);
        assert!(view.iter().all(|p| p.category == category));
    }

    let all = catalog::query(&products, &CatalogCriteria::default());
    assert_eq!(all.len(), products.len());
}

#[test]
fn test_price_orders_are_monotonic() {
    let products = vec![
        product(1, "Delta", Category::Gaming, 20_000, 4.0),
        product(2, "alpha", Category::Budget, 9_999, 3.5),
        product(3, "Charlie", Category::Flagship, 20_000, 4.5),
        product(4, "Bravo", Category::Budget, 12_000, 4.5),
    ];

    let ascending = catalog::query(
        &products,
        &CatalogCriteria::default().with_sort(SortKey::PriceAsc),
    );
    assert!(
        ascending
            .products()
            .windows(2)
            .all(|pair| pair[0].price <= pair[1].price)
    );

    let descending = catalog::query(
        &products,
        &CatalogCriteria::default().with_sort(SortKey::PriceDesc),
    );
    assert!(
        descending
            .products()
            .windows(2)
            .all(|pair| pair[0].price >= pair[1].price)
    );
}

#[test]
fn test_ties_keep_catalog_order() {
    let products = vec![
        product(1, "Delta", Category::Gaming, 20_000, 4.5),
        product(2, "Alpha", Category::Budget, 9_999, 3.5),
        product(3, "Charlie", Category::Flagship, 20_000, 4.5),
    ];

    let by_price = catalog::query(
        &products,
        &CatalogCriteria::default().with_sort(SortKey::PriceAsc),
    );
    let ids: Vec<ProductId> = by_price.iter().map(|p| p.id).collect();
    assert_eq!(
        ids,
        vec![ProductId::new(2), ProductId::new(1), ProductId::new(3)]
    );

    let by_rating = catalog::query(
        &products,
        &CatalogCriteria::default().with_sort(SortKey::RatingDesc),
    );
    assert_eq!(names(by_rating.products()), vec!["Delta", "Charlie", "Alpha"]);
}

#[test]
fn test_name_sort_ignores_case() {
    let products = vec![
        product(1, "charlie", Category::Budget, 1, 1.0),
        product(2, "Bravo", Category::Budget, 1, 1.0),
        product(3, "alpha", Category::Budget, 1, 1.0),
    ];
    let view = catalog::query(&products, &CatalogCriteria::default());
    assert_eq!(names(view.products()), vec!["alpha", "Bravo", "charlie"]);
}

// =============================================================================
// Empty Results
// =============================================================================

#[test]
fn test_counts_agree_with_category_filter() {
    let products = catalog::seed_products();
    for entry in catalog::category_counts(&products) {
        let criteria = CatalogCriteria::default().with_category(entry.category);
        assert_eq!(catalog::query(&products, &criteria).len(), entry.count);
    }
}

#[test]
fn test_empty_known_category_reports_no_matches() {
    let products = catalog::seed_products();
    let criteria = CatalogCriteria::default().with_category(Category::Accessories);
    let view = catalog::query(&products, &criteria);
    assert_eq!(view.empty_reason(), Some(EmptyReason::NoMatches));
}

#[test]
fn test_unknown_category_is_empty_not_error() {
    let criteria = CatalogCriteria::default().with_category(CategoryFilter::parse("tablets"));
    let products = catalog::seed_products();
    let view = catalog::query(&products, &criteria);
    assert!(view.is_empty());
    assert_eq!(view.empty_reason(), Some(EmptyReason::NoMatches));
}

#[test]
fn test_empty_catalog_reason() {
    let view = catalog::query(&[], &CatalogCriteria::default());
    assert_eq!(view.catalog_size(), 0);
    assert_eq!(view.empty_reason(), Some(EmptyReason::NoProducts));
}

#[test]
fn test_store_criteria_drive_filtered_products() {
    let store = Store::new();
    store.set_selected_category(CategoryFilter::parse("flagship"));
    store.set_sort_key(SortKey::parse("price-high"));

    let view = store.filtered_products();
    assert_eq!(names(view.products()), vec!["Shiba Pro Max"]);

    store.set_selected_category(CategoryFilter::All);
    store.set_search_query("zzz");
    assert_eq!(
        store.filtered_products().empty_reason(),
        Some(EmptyReason::NoMatches)
    );
}
