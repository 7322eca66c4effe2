//! Shiba Phone storefront library.
//!
//! Holds the product catalog, the shopper's cart and session, and the
//! simulated login and contract services that drive the purchase flow.
//!
//! # Modules
//!
//! - [`account`] - Account overview and sign-out
//! - [`catalog`] - Seed data and the filter/sort query
//! - [`store`] - Shared catalog, cart and session state
//! - [`services`] - Simulated OTP and contract services
//! - [`checkout`] - Checkout summary and routing
//! - [`personal_info`] - Personal-information form
//! - [`purchase`] - The whole flow from cart to signed contract
//! - [`config`] - Environment configuration
//! - [`telemetry`] - Tracing setup

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod account;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod personal_info;
pub mod purchase;
pub mod services;
pub mod store;
pub mod telemetry;

pub use account::AccountSummary;
pub use catalog::{CatalogCriteria, CatalogView, CategoryCount, EmptyReason};
pub use config::StorefrontConfig;
pub use error::{AppError, Result};
pub use purchase::{PurchaseFlow, PurchaseOutcome, PurchaseRequest};
pub use models::{CartItem, InstallmentPlan, Product, Review, User, UserPatch};
pub use store::{Store, StoreError};
