//! Catalog domain types.
//!
//! Products, plans and reviews are seed data. They are built once when the
//! store is created and never mutated afterwards.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shiba_core::{Category, PlanId, Price, ProductId, ReviewId};

/// A phone for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Cash price in whole rupees.
    pub price: Price,
    /// Image URL.
    pub image: String,
    pub category: Category,
    pub description: String,
    pub installment_plans: Vec<InstallmentPlan>,
    /// Average star rating, 0.0 to 5.0.
    pub rating: f32,
    pub reviews: Vec<Review>,
}

impl Product {
    /// Look up one of this product's installment plans.
    #[must_use]
    pub fn plan(&self, id: PlanId) -> Option<&InstallmentPlan> {
        self.installment_plans.iter().find(|plan| plan.id == id)
    }

    /// Whether `name` or `description` contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// A financing option attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentPlan {
    pub id: PlanId,
    /// Term length in months.
    pub months: u32,
    pub monthly_payment: Price,
    /// Total repayable over the whole term.
    pub total_amount: Price,
    /// Interest rate in percent.
    pub interest_rate: Decimal,
}

impl InstallmentPlan {
    /// Short caption such as `6 months @ ₹5,166/mo`.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} months @ {}/mo", self.months, self.monthly_payment)
    }
}

/// A customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub user_name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

impl Review {
    /// Rating rendered as five filled or hollow stars.
    #[must_use]
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}
