//! Core types for the Shiba Phone storefront.
//!
//! This module provides type-safe wrappers for the storefront's domain values.

pub mod catalog;
pub mod digits;
pub mod email;
pub mod id;
pub mod price;

pub use catalog::{Category, CategoryFilter, ParseCategoryError, SortKey};
pub use digits::{DigitCodeError, OtpCode, PhoneNumber, Pincode};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
