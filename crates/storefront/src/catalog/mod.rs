//! Product catalog: the fixed seed data and the query that filters and
//! sorts it for display.

mod categories;
mod query;
mod seed;

pub use categories::{CategoryCount, category_counts};
pub use query::{CatalogCriteria, CatalogView, EmptyReason, query};
pub use seed::seed_products;
