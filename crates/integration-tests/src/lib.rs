//! Integration tests for the Shiba Phone storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shiba-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_query` - Filter and sort properties over seed and custom catalogs
//! - `cart_session` - Cart totals, login and logout, shared store handles
//! - `purchase_flow` - Whole flow through the simulated services
//!
//! This library holds the fixtures the test files share.

use shiba_core::{Category, Price, ProductId};
use shiba_storefront::Product;
use shiba_storefront::personal_info::PersonalInfoForm;
use shiba_storefront::services::ContractForm;

/// A bare product with no plans or reviews.
#[must_use]
pub fn product(id: u32, name: &str, category: Category, rupees: i64, rating: f32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::rupees(rupees),
        image: String::new(),
        category,
        description: format!("{name} test phone"),
        installment_plans: Vec::new(),
        rating,
        reviews: Vec::new(),
    }
}

/// A personal-information form that passes validation.
#[must_use]
pub fn valid_personal_info() -> PersonalInfoForm {
    PersonalInfoForm {
        full_name: "Ravi Kumar".to_string(),
        email: "ravi@example.in".to_string(),
        date_of_birth: "1990-01-15".to_string(),
        address: "4 Park Street".to_string(),
        city: "Kolkata".to_string(),
        pincode: "700016".to_string(),
        occupation: "business".to_string(),
        monthly_income: "above-100k".to_string(),
    }
}

/// A contract form that passes validation.
#[must_use]
pub fn signed_contract_form() -> ContractForm {
    ContractForm {
        agreed_to_terms: true,
        agreed_to_privacy: true,
        signature: "Ravi Kumar".to_string(),
    }
}
