//! Catalog filtering and sorting.
//!
//! [`query`] is a pure function of the catalog and the criteria: it never
//! touches the store and never mutates the products, so the same inputs
//! always give the same ordered output.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use shiba_core::{CategoryFilter, SortKey};

use crate::models::Product;

/// Filters and ordering chosen on the products page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCriteria {
    pub category: CategoryFilter,
    pub search_query: String,
    pub sort: SortKey,
}

impl CatalogCriteria {
    /// Restrict to a category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Restrict to products whose name or description contains `text`.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_query = text.into();
        self
    }

    /// Set the sort order.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Why a [`CatalogView`] came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The catalog itself has no products.
    NoProducts,
    /// The catalog has products but none pass the criteria.
    NoMatches,
}

/// Result of running a catalog query.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    products: Vec<&'a Product>,
    catalog_size: usize,
}

impl<'a> CatalogView<'a> {
    /// Matching products, in display order.
    #[must_use]
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    /// Consume the view, returning the matching products.
    #[must_use]
    pub fn into_products(self) -> Vec<&'a Product> {
        self.products
    }

    /// Number of matching products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Size of the catalog the query ran against.
    #[must_use]
    pub const fn catalog_size(&self) -> usize {
        self.catalog_size
    }

    /// `None` if there are results, otherwise why there are none.
    #[must_use]
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        if !self.is_empty() {
            None
        } else if self.catalog_size == 0 {
            Some(EmptyReason::NoProducts)
        } else {
            Some(EmptyReason::NoMatches)
        }
    }

    /// Iterate over matching products.
    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }
}

/// Filter and sort `products` according to `criteria`.
///
/// Category is applied first, then the case-insensitive search over name and
/// description, then a stable sort. Products with equal sort keys keep their
/// catalog order.
#[must_use]
pub fn query<'a>(products: &'a [Product], criteria: &CatalogCriteria) -> CatalogView<'a> {
    let needle = criteria.search_query.to_lowercase();

    let mut matches: Vec<&Product> = products
        .iter()
        .filter(|product| criteria.category.matches(product.category))
        .filter(|product| needle.is_empty() || product.matches_lowercase(&needle))
        .collect();

    matches.sort_by(|a, b| compare(a, b, criteria.sort));

    CatalogView {
        products: matches,
        catalog_size: products.len(),
    }
}

fn compare(a: &Product, b: &Product, sort: SortKey) -> Ordering {
    match sort {
        SortKey::NameAsc => compare_names(&a.name, &b.name),
        SortKey::PriceAsc => a.price.cmp(&b.price),
        SortKey::PriceDesc => b.price.cmp(&a.price),
        SortKey::RatingDesc => b.rating.total_cmp(&a.rating),
    }
}

/// Case-insensitive name order. Names differing only in case put the
/// lowercase form first, as locale-aware collation does.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
