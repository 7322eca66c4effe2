//! Catalog browsing commands.

use shiba_core::{CategoryFilter, ProductId, SortKey};
use shiba_storefront::catalog::category_counts;
use shiba_storefront::{EmptyReason, Product, Store};

use super::{CommandError, print_json};

/// List products matching the given filters.
///
/// Unknown categories match nothing; unknown sort keys fall back to name.
///
/// # Errors
///
/// Returns `CommandError::Json` if JSON output fails.
pub fn list(
    store: &Store,
    category: Option<&str>,
    search: Option<&str>,
    sort: Option<&str>,
    json: bool,
) -> Result<(), CommandError> {
    if let Some(category) = category {
        store.set_selected_category(CategoryFilter::parse(category));
    }
    if let Some(search) = search {
        store.set_search_query(search);
    }
    if let Some(sort) = sort {
        store.set_sort_key(SortKey::parse(sort));
    }

    let criteria = store.criteria();
    let view = store.filtered_products();
    tracing::debug!(
        category = criteria.category.as_str(),
        sort = criteria.sort.as_str(),
        matches = view.len(),
        "catalog queried"
    );

    if json {
        return print_json(view.products());
    }

    match view.empty_reason() {
        Some(EmptyReason::NoProducts) => println!("No products available."),
        Some(EmptyReason::NoMatches) => {
            println!("No products found matching your criteria.");
        }
        None => {
            println!(
                "Showing {} of {} products (sorted by {})",
                view.len(),
                view.catalog_size(),
                criteria.sort.label()
            );
            for product in view.iter() {
                println!(
                    "  [{}] {:<20} {:<9} {:>10}  ★ {:.1}",
                    product.id,
                    product.name,
                    product.category.label(),
                    product.price,
                    product.rating
                );
            }
        }
    }
    Ok(())
}

/// List every category with its product count.
///
/// # Errors
///
/// Returns `CommandError::Json` if JSON output fails.
pub fn categories(store: &Store, json: bool) -> Result<(), CommandError> {
    let counts = category_counts(store.products());

    if json {
        return print_json(&counts);
    }

    for entry in &counts {
        println!(
            "  {:<12} {:<16} {} products",
            entry.category.as_str(),
            entry.category.title(),
            entry.count
        );
        println!("               {}", entry.category.description());
    }
    Ok(())
}

/// Print one product in full.
///
/// # Errors
///
/// Returns `CommandError::App` if the product does not exist.
pub fn show(store: &Store, id: ProductId, json: bool) -> Result<(), CommandError> {
    let product = store
        .find_product(id)
        .map_err(shiba_storefront::AppError::from)?;

    if json {
        return print_json(product);
    }

    print_product(product);
    Ok(())
}

fn print_product(product: &Product) {
    println!("{} ({})", product.name, product.category.label());
    println!("{}  ★ {:.1}", product.price, product.rating);
    println!();
    println!("{}", product.description);

    println!();
    println!("Installment plans:");
    for plan in &product.installment_plans {
        println!(
            "  [{}] {} (total {}, {}% interest)",
            plan.id,
            plan.caption(),
            plan.total_amount,
            plan.interest_rate
        );
    }

    if !product.reviews.is_empty() {
        println!();
        println!("Reviews:");
        for review in &product.reviews {
            println!(
                "  {} {} ({}): {}",
                review.stars(),
                review.user_name,
                review.date,
                review.comment
            );
        }
    }
}
