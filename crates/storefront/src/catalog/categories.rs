//! Per-category product counts for the categories page.

use serde::Serialize;

use shiba_core::Category;

use crate::models::Product;

/// One row of the categories page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    /// Products in the catalog with this category.
    pub count: usize,
}

/// Count `products` per category, in menu order.
///
/// Every known category gets a row, including those with no products.
#[must_use]
pub fn category_counts(products: &[Product]) -> Vec<CategoryCount> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: products
                .iter()
                .filter(|product| product.category == category)
                .count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_products;

    #[test]
    fn test_seed_counts() {
        let counts = category_counts(&seed_products());
        let pairs: Vec<(Category, usize)> = counts.iter().map(|c| (c.category, c.count)).collect();
        assert_eq!(
            pairs,
            [
                (Category::Flagship, 1),
                (Category::Budget, 1),
                (Category::Gaming, 1),
                (Category::Accessories, 0),
            ]
        );
    }

    #[test]
    fn test_counts_follow_catalog() {
        let mut products = seed_products();
        let extra = products
            .iter()
            .find(|p| p.category == Category::Flagship)
            .cloned();
        products.extend(extra);

        let counts = category_counts(&products);
        let total: usize = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, products.len());
        assert!(
            counts
                .iter()
                .any(|c| c.category == Category::Flagship && c.count == 2)
        );
    }

    #[test]
    fn test_empty_catalog_still_lists_categories() {
        let counts = category_counts(&[]);
        assert_eq!(counts.len(), Category::ALL.len());
        assert!(counts.iter().all(|c| c.count == 0));
    }
}
