//! Domain models for the storefront.

pub mod cart;
pub mod product;
pub mod user;

pub use cart::{CartItem, cart_total};
pub use product::{InstallmentPlan, Product, Review};
pub use user::{User, UserPatch};
